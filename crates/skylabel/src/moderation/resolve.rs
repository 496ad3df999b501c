use super::defs::LabelerDefs;
use super::interpret::interpret_label_value_definition;
use super::registry::global_label;
use super::strings::GlobalLabelStrings;
use super::types::{
    Blurs, InterpretedLabelValueDefinition, Label, LabelValueDefinition, LocalizedStrings,
    Severity,
};
use skylabel_common::Language;
use smol_str::format_smolstr;
use std::borrow::Cow;

/// Find the definition that applies to a label
///
/// In order of priority:
/// 1. a definition published by the label's own source, unless the value is
///    reserved (`!`-prefixed)
/// 2. the built-in global definition for the value
/// 3. an inert definition scoped to the source, with no severity, blurring or locales
///
/// Never fails; unknown values resolve to the inert fallback.
pub fn resolve_definition<'a>(
    label: &Label,
    defs: &'a LabelerDefs,
) -> Cow<'a, InterpretedLabelValueDefinition> {
    if !label.is_reserved() {
        // Only a definition both stored under and defined by the source counts
        let custom = defs.get(&label.src).and_then(|defs| {
            defs.iter().find(|def| {
                def.identifier == label.val && def.defined_by.as_ref() == Some(&label.src)
            })
        });
        if let Some(def) = custom {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                val = %label.val,
                src = %label.src,
                shadows_global = global_label(&label.val).is_some(),
                "using labeler definition"
            );
            return Cow::Borrowed(def);
        }
    }

    if let Some(def) = global_label(&label.val) {
        return Cow::Borrowed(def);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(val = %label.val, src = %label.src, "no definition, using fallback");

    Cow::Owned(interpret_label_value_definition(
        LabelValueDefinition {
            identifier: label.val.clone(),
            severity: Severity::None,
            blurs: Blurs::None,
            default_setting: None,
            adult_only: None,
            locales: Vec::new(),
        },
        Some(label.src.clone()),
    ))
}

/// Pick the display strings for a definition in the given locale
///
/// Global definitions take their strings from `global_strings` verbatim; those are
/// already in the UI language. Labeler definitions use the first of their locales
/// whose language range selects `locale` (`en` selects `en-US`), else their first
/// locale. Anything left over gets a generated name and description in `locale`.
pub fn resolve_strings<'a>(
    locale: &Language,
    global_strings: &'a GlobalLabelStrings,
    def: &'a InterpretedLabelValueDefinition,
) -> Cow<'a, LocalizedStrings> {
    if def.defined_by.is_none() {
        if let Some(strings) = global_strings.get(&def.identifier) {
            return Cow::Borrowed(strings);
        }
    } else {
        let matched = def
            .locales
            .iter()
            .find(|strings| locale.basic_match(strings.lang.as_str()));
        if let Some(strings) = matched.or_else(|| def.locales.first()) {
            return Cow::Borrowed(strings);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(identifier = %def.identifier, %locale, "no strings, using fallback");

    Cow::Owned(LocalizedStrings {
        lang: locale.clone(),
        name: def.identifier.clone(),
        description: format_smolstr!("Labeled \"{}\"", def.identifier),
    })
}
