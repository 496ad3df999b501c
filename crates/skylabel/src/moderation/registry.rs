//! The built-in label values every client understands without consulting a labeler

use super::types::{
    BehaviorAction, Behaviors, Blurs, InterpretedLabelValueDefinition, LabelFlag,
    LabelPreference, ModerationBehavior, Severity,
};
use smol_str::SmolStr;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const BLUR: Option<BehaviorAction> = Some(BehaviorAction::Blur);

static GLOBAL_LABELS: LazyLock<BTreeMap<SmolStr, InterpretedLabelValueDefinition>> =
    LazyLock::new(|| {
        [
            system(
                "!hide",
                LabelPreference::Hide,
                Severity::Alert,
                &[LabelFlag::NoOverride, LabelFlag::NoSelf],
            ),
            system(
                "!warn",
                LabelPreference::Warn,
                Severity::None,
                &[LabelFlag::NoSelf],
            ),
            system(
                "!no-unauthenticated",
                LabelPreference::Hide,
                Severity::None,
                &[LabelFlag::NoOverride, LabelFlag::Unauthed],
            ),
            adult_media("porn", LabelPreference::Hide, true),
            adult_media("sexual", LabelPreference::Warn, true),
            adult_media("nudity", LabelPreference::Ignore, false),
            adult_media("graphic-media", LabelPreference::Warn, true),
            // legacy alias of graphic-media
            adult_media("gore", LabelPreference::Warn, true),
        ]
        .into_iter()
        .map(|def| (def.identifier.clone(), def))
        .collect()
    });

/// Non-configurable moderator labels. `!warn` leaves the display name alone on accounts.
fn system(
    identifier: &'static str,
    default_setting: LabelPreference,
    severity: Severity,
    flags: &[LabelFlag],
) -> InterpretedLabelValueDefinition {
    let account_display_name = if identifier == "!warn" { None } else { BLUR };
    InterpretedLabelValueDefinition {
        identifier: SmolStr::new_static(identifier),
        defined_by: None,
        configurable: false,
        default_setting,
        severity,
        blurs: Blurs::Content,
        adult_only: false,
        flags: flags.to_vec(),
        behaviors: Behaviors {
            account: ModerationBehavior {
                profile_list: BLUR,
                profile_view: BLUR,
                avatar: BLUR,
                banner: BLUR,
                display_name: account_display_name,
                content_list: BLUR,
                content_view: BLUR,
                ..Default::default()
            },
            profile: ModerationBehavior {
                avatar: BLUR,
                banner: BLUR,
                display_name: BLUR,
                ..Default::default()
            },
            content: ModerationBehavior {
                content_list: BLUR,
                content_view: BLUR,
                ..Default::default()
            },
        },
        locales: Vec::new(),
    }
}

/// Self-labelable adult content values, which only ever blur media
fn adult_media(
    identifier: &'static str,
    default_setting: LabelPreference,
    adult: bool,
) -> InterpretedLabelValueDefinition {
    let media = ModerationBehavior {
        avatar: BLUR,
        banner: BLUR,
        ..Default::default()
    };
    InterpretedLabelValueDefinition {
        identifier: SmolStr::new_static(identifier),
        defined_by: None,
        configurable: true,
        default_setting,
        severity: Severity::None,
        blurs: Blurs::Media,
        adult_only: false,
        flags: if adult { vec![LabelFlag::Adult] } else { Vec::new() },
        behaviors: Behaviors {
            account: media.clone(),
            profile: media,
            content: ModerationBehavior {
                content_media: BLUR,
                ..Default::default()
            },
        },
        locales: Vec::new(),
    }
}

/// Look up a global definition by exact label value
pub fn global_label(identifier: &str) -> Option<&'static InterpretedLabelValueDefinition> {
    GLOBAL_LABELS.get(identifier)
}

/// All global definitions, ordered by identifier
pub fn global_labels() -> impl Iterator<Item = &'static InterpretedLabelValueDefinition> {
    GLOBAL_LABELS.values()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contents() {
        let ids: Vec<&str> = global_labels().map(|d| d.identifier.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "!hide",
                "!no-unauthenticated",
                "!warn",
                "gore",
                "graphic-media",
                "nudity",
                "porn",
                "sexual"
            ]
        );
        assert!(global_labels().all(|d| d.defined_by.is_none()));
    }

    #[test]
    fn exact_key_match_only() {
        assert!(global_label("porn").is_some());
        assert!(global_label("Porn").is_none());
        assert!(global_label("porn ").is_none());
        assert!(global_label("spam").is_none());
    }

    #[test]
    fn hide_cannot_be_overridden() {
        let hide = global_label("!hide").unwrap();
        assert!(!hide.configurable);
        assert!(hide.has_flag(&LabelFlag::NoOverride));
        assert_eq!(hide.default_setting, LabelPreference::Hide);
        assert_eq!(
            hide.behaviors.account.display_name,
            Some(BehaviorAction::Blur)
        );

        let warn = global_label("!warn").unwrap();
        assert!(!warn.has_flag(&LabelFlag::NoOverride));
        assert_eq!(warn.behaviors.account.display_name, None);
    }

    #[test]
    fn adult_labels_blur_media() {
        let porn = global_label("porn").unwrap();
        assert!(porn.configurable);
        assert!(porn.has_flag(&LabelFlag::Adult));
        assert_eq!(
            porn.behaviors.content.content_media,
            Some(BehaviorAction::Blur)
        );

        let nudity = global_label("nudity").unwrap();
        assert!(nudity.flags.is_empty());
        assert_eq!(nudity.default_setting, LabelPreference::Ignore);
    }
}
