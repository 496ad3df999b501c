use skylabel_common::{Did, Language};
use smol_str::SmolStr;
use std::fmt;

/// Declares an enum over a set of known wire strings, with an `Other` variant
/// carrying anything unrecognized so decoding never fails on new values.
macro_rules! open_string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "SmolStr", into = "SmolStr")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value not known to this crate
            Other(SmolStr),
        }

        impl $name {
            /// The wire representation
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(other) => other.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )+
                    other => Self::Other(SmolStr::new(other)),
                }
            }
        }

        impl From<SmolStr> for $name {
            fn from(value: SmolStr) -> Self {
                match value.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<$name> for SmolStr {
            fn from(value: $name) -> Self {
                match value {
                    $( $name::$variant => SmolStr::new_static($wire), )+
                    $name::Other(other) => other,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

open_string_enum! {
    /// How strongly a label should be surfaced to the user
    pub enum Severity {
        /// Show a prominent warning
        Alert => "alert",
        /// Show an informational badge
        Inform => "inform",
        /// Nothing beyond any blurring
        None => "none",
    }
}

open_string_enum! {
    /// What a label hides when it applies
    pub enum Blurs {
        /// Hide the whole content (text and media)
        Content => "content",
        /// Hide media only
        Media => "media",
        /// Don't hide anything
        None => "none",
    }
}

open_string_enum! {
    /// A user's (or a definition's default) response to a label value
    pub enum LabelPreference {
        /// Show normally
        Ignore => "ignore",
        /// Show behind a warning
        Warn => "warn",
        /// Filter out entirely
        Hide => "hide",
    }
}

open_string_enum! {
    /// Special handling flags carried by interpreted definitions
    pub enum LabelFlag {
        /// The user cannot click through the label
        NoOverride => "no-override",
        /// Only applies when adult content is disabled
        Adult => "adult",
        /// Only applies to logged out viewers
        Unauthed => "unauthed",
        /// Not applied when the viewer is the labeled account
        NoSelf => "no-self",
    }
}

/// An assertion by a labeler about a piece of content or an account
///
/// Mirrors `com.atproto.label.defs#label`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(start_fn = new, on(SmolStr, into))]
pub struct Label {
    /// The AT Protocol version of the label object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<i64>,
    /// DID of the actor who created this label
    pub src: Did,
    /// AT URI of the record, repository (account), or other resource that this label applies to
    pub uri: SmolStr,
    /// Optionally, CID specifying the specific version of `uri` resource this label applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<SmolStr>,
    /// The short string name of the value or type of this label
    pub val: SmolStr,
    /// If true, this is a negation label, overwriting a previous label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neg: Option<bool>,
    /// Timestamp when this label was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cts: Option<SmolStr>,
    /// Timestamp at which this label expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<SmolStr>,
}

impl Label {
    /// Whether the value is system-reserved (`!hide`, `!warn`, ...)
    ///
    /// Reserved values can only carry their global meaning; labelers can't redefine them.
    pub fn is_reserved(&self) -> bool {
        self.val.starts_with('!')
    }
}

/// Display strings for a label value in one language
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedStrings {
    /// The code of the language these strings are written in
    pub lang: Language,
    /// A short human-readable name for the label
    pub name: SmolStr,
    /// A longer description of what the label means and why it might be applied
    pub description: SmolStr,
}

impl LocalizedStrings {
    /// Convenience constructor
    pub fn new(lang: Language, name: impl Into<SmolStr>, description: impl Into<SmolStr>) -> Self {
        Self {
            lang,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A label value definition as published by a labeler
///
/// Mirrors `com.atproto.label.defs#labelValueDefinition`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(start_fn = new, on(SmolStr, into))]
pub struct LabelValueDefinition {
    /// The value of the label being defined
    pub identifier: SmolStr,
    /// How should a client visually convey this label?
    pub severity: Severity,
    /// What should this label hide in the UI, if applied?
    pub blurs: Blurs,
    /// The default setting for this label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_setting: Option<LabelPreference>,
    /// Does the user need to have adult content enabled in order to configure this label?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adult_only: Option<bool>,
    /// Localized names and descriptions, first entry is the default
    ///
    /// Entries with a malformed language tag are dropped when decoding.
    #[serde(default, deserialize_with = "deserialize_locales")]
    #[builder(default)]
    pub locales: Vec<LocalizedStrings>,
}

fn deserialize_locales<'de, D>(deserializer: D) -> Result<Vec<LocalizedStrings>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    struct RawStrings {
        lang: SmolStr,
        name: SmolStr,
        description: SmolStr,
    }

    let raw: Vec<RawStrings> = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|raw| match Language::new(raw.lang.as_str()) {
            Ok(lang) => Some(LocalizedStrings {
                lang,
                name: raw.name,
                description: raw.description,
            }),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(lang = %raw.lang, name = %raw.name, error = %_e, "skipping locale with malformed language tag");
                None
            }
        })
        .collect())
}

/// What a UI element should do when a label applies to it
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorAction {
    /// Cover the element
    Blur,
    /// Show a warning
    Alert,
    /// Show an informational badge
    Inform,
}

/// Actions to take in each UI context for one kind of label target
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModerationBehavior {
    /// Profile in a list, e.g. search results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_list: Option<BehaviorAction>,
    /// Full profile page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_view: Option<BehaviorAction>,
    /// Avatar image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<BehaviorAction>,
    /// Profile banner image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<BehaviorAction>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<BehaviorAction>,
    /// Content in a feed or list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_list: Option<BehaviorAction>,
    /// Content opened on its own
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_view: Option<BehaviorAction>,
    /// Embedded media
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_media: Option<BehaviorAction>,
}

/// Behaviors keyed by what the label was applied to
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Behaviors {
    /// Label applied to an account (the repo DID)
    pub account: ModerationBehavior,
    /// Label applied to a profile record
    pub profile: ModerationBehavior,
    /// Label applied to any other record
    pub content: ModerationBehavior,
}

/// A label value definition with its scope and UI behavior worked out
///
/// `defined_by` is `None` for the built-in global definitions and the labeler's
/// DID for everything else.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InterpretedLabelValueDefinition {
    /// The label value this defines
    pub identifier: SmolStr,
    /// Labeler that published the definition, `None` for global ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_by: Option<Did>,
    /// Whether users may change their preference for it
    pub configurable: bool,
    /// Preference used when the user hasn't set one
    pub default_setting: LabelPreference,
    /// How strongly to surface it
    pub severity: Severity,
    /// What it hides
    pub blurs: Blurs,
    /// Only configurable with adult content enabled
    #[serde(default)]
    pub adult_only: bool,
    /// Special handling
    pub flags: Vec<LabelFlag>,
    /// What to do in each UI context
    pub behaviors: Behaviors,
    /// Localized strings, first entry is the default
    #[serde(default)]
    pub locales: Vec<LocalizedStrings>,
}

impl InterpretedLabelValueDefinition {
    /// Whether this is one of the built-in global definitions
    pub fn is_global(&self) -> bool {
        self.defined_by.is_none()
    }

    /// Whether the definition carries `flag`
    pub fn has_flag(&self, flag: &LabelFlag) -> bool {
        self.flags.contains(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_enums_keep_unknown_values() {
        assert_eq!(Severity::from("alert"), Severity::Alert);
        assert_eq!(
            Severity::from("catastrophic"),
            Severity::Other(SmolStr::new("catastrophic"))
        );
        assert_eq!(Severity::from("catastrophic").as_str(), "catastrophic");

        let blurs: Blurs = serde_json::from_str("\"everything\"").unwrap();
        assert_eq!(serde_json::to_string(&blurs).unwrap(), "\"everything\"");
    }

    #[test]
    fn label_from_wire_json() {
        let label: Label = serde_json::from_value(serde_json::json!({
            "ver": 1,
            "src": "did:plc:ar7c4by46qjdydhdevvrndac",
            "uri": "at://did:plc:someone/app.bsky.feed.post/3k2a",
            "val": "!hide",
            "cts": "2024-03-01T00:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(label.src.as_str(), "did:plc:ar7c4by46qjdydhdevvrndac");
        assert!(label.is_reserved());
        assert_eq!(label.neg, None);
    }

    #[test]
    fn definition_from_wire_json() {
        let def: LabelValueDefinition = serde_json::from_value(serde_json::json!({
            "identifier": "spoilers",
            "severity": "inform",
            "blurs": "content",
            "defaultSetting": "warn",
            "locales": [
                { "lang": "en", "name": "Spoilers", "description": "Plot details" }
            ]
        }))
        .unwrap();

        assert_eq!(def.severity, Severity::Inform);
        assert_eq!(def.blurs, Blurs::Content);
        assert_eq!(def.default_setting, Some(LabelPreference::Warn));
        assert_eq!(def.adult_only, None);
        assert_eq!(def.locales[0].lang.as_str(), "en");
    }

    #[test]
    fn malformed_locale_tags_are_dropped() {
        let def: LabelValueDefinition = serde_json::from_value(serde_json::json!({
            "identifier": "spoilers",
            "severity": "inform",
            "blurs": "content",
            "locales": [
                { "lang": "en_US", "name": "Spoilers (US)", "description": "Plot details" },
                { "lang": "fr", "name": "Divulgâcheur", "description": "Intrigue" }
            ]
        }))
        .unwrap();

        assert_eq!(def.locales.len(), 1);
        assert_eq!(def.locales[0].lang.as_str(), "fr");
    }

    #[test]
    fn behaviors_skip_unset_contexts() {
        let behavior = ModerationBehavior {
            content_media: Some(BehaviorAction::Blur),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&behavior).unwrap(),
            serde_json::json!({ "contentMedia": "blur" })
        );
    }
}
