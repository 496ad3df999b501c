use super::types::LocalizedStrings;
use skylabel_common::Language;
use smol_str::SmolStr;
use std::collections::HashMap;

/// Display strings for the global label values, already localized to the UI language
///
/// Global definitions carry no locales of their own; their names come from the
/// host application's translation catalog instead.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct GlobalLabelStrings {
    strings: HashMap<SmolStr, LocalizedStrings>,
}

const ENGLISH: &[(&str, &str, &str)] = &[
    (
        "!hide",
        "Content Blocked",
        "This content has been hidden by the moderators.",
    ),
    (
        "!warn",
        "Content Warning",
        "This content has received a general warning from moderators.",
    ),
    (
        "!no-unauthenticated",
        "Sign-in Required",
        "This user has requested that their content only be shown to signed-in users.",
    ),
    ("porn", "Adult Content", "Explicit sexual images."),
    ("sexual", "Sexually Suggestive", "Does not include nudity."),
    ("nudity", "Non-sexual Nudity", "E.g. artistic nudes."),
    (
        "graphic-media",
        "Graphic Media",
        "Explicit or potentially disturbing media.",
    ),
    (
        "gore",
        "Graphic Media",
        "Explicit or potentially disturbing media.",
    ),
];

impl GlobalLabelStrings {
    /// An empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English strings for every global label value
    pub fn english() -> Self {
        let lang = Language::new_static("en").expect("`en` is a valid language tag");
        ENGLISH
            .iter()
            .map(|&(identifier, name, description)| {
                (
                    SmolStr::new_static(identifier),
                    LocalizedStrings::new(lang.clone(), name, description),
                )
            })
            .collect()
    }

    /// Add or replace the strings for `identifier`
    pub fn insert(&mut self, identifier: impl Into<SmolStr>, strings: LocalizedStrings) {
        self.strings.insert(identifier.into(), strings);
    }

    /// Strings for a label value, if the catalog has them
    pub fn get(&self, identifier: &str) -> Option<&LocalizedStrings> {
        self.strings.get(identifier)
    }

    /// Whether the catalog has strings for `identifier`
    pub fn contains(&self, identifier: &str) -> bool {
        self.strings.contains_key(identifier)
    }

    /// Number of label values with strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the catalog has no strings at all
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl<K: Into<SmolStr>> FromIterator<(K, LocalizedStrings)> for GlobalLabelStrings {
    fn from_iter<T: IntoIterator<Item = (K, LocalizedStrings)>>(iter: T) -> Self {
        Self {
            strings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::global_labels;

    #[test]
    fn english_covers_every_global_label() {
        let strings = GlobalLabelStrings::english();
        for def in global_labels() {
            assert!(
                strings.contains(&def.identifier),
                "missing strings for {}",
                def.identifier
            );
        }
        assert_eq!(strings.len(), ENGLISH.len());
    }

    #[test]
    fn english_entries() {
        let strings = GlobalLabelStrings::english();
        let hide = strings.get("!hide").unwrap();
        assert_eq!(hide.name, "Content Blocked");
        assert_eq!(hide.lang.as_str(), "en");
        assert_eq!(
            strings.get("gore").unwrap().name,
            strings.get("graphic-media").unwrap().name
        );
    }

    #[test]
    fn catalog_from_json() {
        let strings: GlobalLabelStrings = serde_json::from_value(serde_json::json!({
            "porn": { "lang": "de", "name": "Inhalte für Erwachsene", "description": "Explizite Bilder." }
        }))
        .unwrap();
        assert_eq!(strings.get("porn").unwrap().lang.as_str(), "de");
        assert!(strings.get("sexual").is_none());
    }
}
