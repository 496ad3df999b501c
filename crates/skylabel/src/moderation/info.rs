use super::defs::LabelerDefs;
use super::labeler::{LabelerProfile, LabelerView, find_labeler};
use super::resolve::{resolve_definition, resolve_strings};
use super::strings::GlobalLabelStrings;
use super::types::{InterpretedLabelValueDefinition, Label, LocalizedStrings};
use skylabel_common::Language;
use std::borrow::Cow;

/// Everything a UI needs to display a label
#[derive(serde::Serialize, Debug, Clone)]
pub struct LabelInfo<'a, L = LabelerView> {
    /// The label itself
    pub label: &'a Label,
    /// The definition that applies to it
    pub definition: Cow<'a, InterpretedLabelValueDefinition>,
    /// Display strings for the definition in the requested locale
    pub strings: Cow<'a, LocalizedStrings>,
    /// Profile of the labeler that issued the label, if known
    pub labeler: Option<&'a L>,
}

/// Resolve a label's definition and display strings, and find its labeler
pub fn label_info<'a, L: LabelerProfile>(
    label: &'a Label,
    locale: &Language,
    global_strings: &'a GlobalLabelStrings,
    defs: &'a LabelerDefs,
    labelers: &'a [L],
) -> LabelInfo<'a, L> {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("label_info", val = %label.val, src = %label.src).entered();

    let definition = resolve_definition(label, defs);
    let strings = match definition {
        Cow::Borrowed(def) => resolve_strings(locale, global_strings, def),
        // fallback strings for an owned definition can't borrow from it
        Cow::Owned(ref def) => Cow::Owned(resolve_strings(locale, global_strings, def).into_owned()),
    };
    LabelInfo {
        label,
        definition,
        strings,
        labeler: find_labeler(labelers, &label.src),
    }
}

/// The lookup state shared by every label rendered in one locale
///
/// ```
/// use skylabel::moderation::{GlobalLabelStrings, LabelContext, LabelerDefs};
/// use skylabel::Language;
///
/// let ctx = LabelContext::new()
///     .locale(Language::new("pt-BR").unwrap())
///     .global_strings(GlobalLabelStrings::english())
///     .defs(LabelerDefs::new())
///     .build();
/// assert!(ctx.labelers.is_empty());
/// ```
#[derive(Debug, Clone, bon::Builder)]
#[builder(start_fn = new)]
pub struct LabelContext {
    /// The active UI locale
    pub locale: Language,
    /// Strings for the global label values, English unless given
    #[builder(default = GlobalLabelStrings::english())]
    pub global_strings: GlobalLabelStrings,
    /// Labeler-published definitions
    #[builder(default)]
    pub defs: LabelerDefs,
    /// Profiles of the labelers the user subscribes to
    #[builder(default)]
    pub labelers: Vec<LabelerView>,
}

impl LabelContext {
    /// Resolve a single label
    pub fn label_info<'a>(&'a self, label: &'a Label) -> LabelInfo<'a> {
        label_info(
            label,
            &self.locale,
            &self.global_strings,
            &self.defs,
            &self.labelers,
        )
    }

    /// Resolve a batch of labels, e.g. all labels on one post
    pub fn label_infos<'a>(
        &'a self,
        labels: impl IntoIterator<Item = &'a Label>,
    ) -> impl Iterator<Item = LabelInfo<'a>> {
        labels.into_iter().map(move |label| self.label_info(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::{LabelValueDefinition, Severity};
    use skylabel_common::Did;

    fn label(src: &str, val: &str) -> Label {
        Label::new()
            .src(Did::new(src).unwrap())
            .uri("did:plc:author")
            .val(val)
            .build()
    }

    #[test]
    fn fallback_definition_yields_fallback_strings() {
        let defs = LabelerDefs::new();
        let global = GlobalLabelStrings::english();
        let label = label("did:plc:labeler", "mystery");
        let info = label_info::<Did>(
            &label,
            &Language::new("en").unwrap(),
            &global,
            &defs,
            &[],
        );

        assert_eq!(info.strings.name, "mystery");
        assert_eq!(info.strings.description, "Labeled \"mystery\"");
        assert!(info.labeler.is_none());
    }

    #[test]
    fn joins_labeler_by_source() {
        let labelers = vec![
            Did::new("did:plc:other").unwrap(),
            Did::new("did:plc:labeler").unwrap(),
        ];
        let label = label("did:plc:labeler", "porn");
        let global = GlobalLabelStrings::english();
        let defs = LabelerDefs::new();
        let info = label_info(
            &label,
            &Language::new("en").unwrap(),
            &global,
            &defs,
            &labelers,
        );
        assert_eq!(info.labeler, Some(&labelers[1]));
        assert_eq!(info.strings.name, "Adult Content");
    }

    #[test]
    fn context_resolves_batches() {
        let mut defs = LabelerDefs::new();
        defs.insert(
            Did::new("did:plc:labeler").unwrap(),
            vec![
                LabelValueDefinition::new()
                    .identifier("rude")
                    .severity(Severity::Alert)
                    .blurs("none".into())
                    .locales(vec![LocalizedStrings::new(
                        Language::new("en").unwrap(),
                        "Rude",
                        "Impolite behavior",
                    )])
                    .build(),
            ],
        );
        let ctx = LabelContext::new()
            .locale(Language::new("en-AU").unwrap())
            .defs(defs)
            .build();

        let labels = [label("did:plc:labeler", "rude"), label("did:plc:labeler", "!warn")];
        let names: Vec<String> = ctx
            .label_infos(&labels)
            .map(|info| info.strings.name.to_string())
            .collect();
        assert_eq!(names, vec!["Rude", "Content Warning"]);
    }
}
