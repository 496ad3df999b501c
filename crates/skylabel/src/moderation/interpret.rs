use super::types::{
    BehaviorAction, Behaviors, Blurs, InterpretedLabelValueDefinition, LabelFlag,
    LabelPreference, LabelValueDefinition, ModerationBehavior, Severity,
};
use skylabel_common::Did;

/// Work out the scope, default setting, flags and per-context behaviors of a
/// labeler-published definition
///
/// `defined_by` is the labeler the definition came from. Labeler definitions are
/// always user-configurable and never apply to the labeled account's own view.
pub fn interpret_label_value_definition(
    def: LabelValueDefinition,
    defined_by: Option<Did>,
) -> InterpretedLabelValueDefinition {
    let adult_only = def.adult_only.unwrap_or(false);
    let alert_or_inform = match def.severity {
        Severity::Alert => Some(BehaviorAction::Alert),
        Severity::Inform => Some(BehaviorAction::Inform),
        _ => None,
    };
    let blur_or = |fallback| {
        if adult_only {
            Some(BehaviorAction::Blur)
        } else {
            fallback
        }
    };

    let mut behaviors = Behaviors::default();
    match def.blurs {
        Blurs::Content => {
            behaviors.account = ModerationBehavior {
                profile_list: alert_or_inform,
                profile_view: alert_or_inform,
                content_list: Some(BehaviorAction::Blur),
                content_view: blur_or(alert_or_inform),
                ..Default::default()
            };
            behaviors.profile = ModerationBehavior {
                profile_list: alert_or_inform,
                profile_view: alert_or_inform,
                ..Default::default()
            };
            behaviors.content = ModerationBehavior {
                content_list: Some(BehaviorAction::Blur),
                content_view: blur_or(alert_or_inform),
                ..Default::default()
            };
        }
        Blurs::Media => {
            behaviors.account = ModerationBehavior {
                profile_list: alert_or_inform,
                profile_view: alert_or_inform,
                avatar: Some(BehaviorAction::Blur),
                banner: Some(BehaviorAction::Blur),
                ..Default::default()
            };
            behaviors.profile = ModerationBehavior {
                profile_list: alert_or_inform,
                profile_view: alert_or_inform,
                avatar: Some(BehaviorAction::Blur),
                banner: Some(BehaviorAction::Blur),
                ..Default::default()
            };
            behaviors.content = ModerationBehavior {
                content_media: Some(BehaviorAction::Blur),
                ..Default::default()
            };
        }
        Blurs::None => {
            behaviors.account = ModerationBehavior {
                profile_list: alert_or_inform,
                profile_view: alert_or_inform,
                content_list: alert_or_inform,
                content_view: alert_or_inform,
                ..Default::default()
            };
            behaviors.profile = ModerationBehavior {
                profile_list: alert_or_inform,
                profile_view: alert_or_inform,
                ..Default::default()
            };
            behaviors.content = ModerationBehavior {
                content_list: alert_or_inform,
                content_view: alert_or_inform,
                ..Default::default()
            };
        }
        // Unknown blur policies get no behaviors at all
        Blurs::Other(_) => {}
    }

    let default_setting = match def.default_setting {
        Some(LabelPreference::Hide) => LabelPreference::Hide,
        Some(LabelPreference::Ignore) => LabelPreference::Ignore,
        _ => LabelPreference::Warn,
    };

    let mut flags = vec![LabelFlag::NoSelf];
    if adult_only {
        flags.push(LabelFlag::Adult);
    }

    InterpretedLabelValueDefinition {
        identifier: def.identifier,
        defined_by,
        configurable: true,
        default_setting,
        severity: def.severity,
        blurs: def.blurs,
        adult_only,
        flags,
        behaviors,
        locales: def.locales,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeler() -> Did {
        Did::new_static("did:plc:labeler").unwrap()
    }

    fn def(severity: Severity, blurs: Blurs) -> LabelValueDefinition {
        LabelValueDefinition::new()
            .identifier("test-label")
            .severity(severity)
            .blurs(blurs)
            .build()
    }

    #[test]
    fn media_alert() {
        let interpreted =
            interpret_label_value_definition(def(Severity::Alert, Blurs::Media), Some(labeler()));

        let b = &interpreted.behaviors;
        assert_eq!(b.account.profile_list, Some(BehaviorAction::Alert));
        assert_eq!(b.account.avatar, Some(BehaviorAction::Blur));
        assert_eq!(b.profile.banner, Some(BehaviorAction::Blur));
        assert_eq!(b.content.content_media, Some(BehaviorAction::Blur));
        assert_eq!(b.content.content_view, None);
        assert_eq!(interpreted.defined_by, Some(labeler()));
    }

    #[test]
    fn content_inform_blurs_lists_only() {
        let interpreted =
            interpret_label_value_definition(def(Severity::Inform, Blurs::Content), None);

        let b = &interpreted.behaviors;
        assert_eq!(b.content.content_list, Some(BehaviorAction::Blur));
        assert_eq!(b.content.content_view, Some(BehaviorAction::Inform));
        assert_eq!(b.account.content_list, Some(BehaviorAction::Blur));
        assert_eq!(b.profile.profile_view, Some(BehaviorAction::Inform));
        assert_eq!(b.profile.content_list, None);
    }

    #[test]
    fn adult_only_blurs_content_view_and_flags() {
        let mut d = def(Severity::Alert, Blurs::Content);
        d.adult_only = Some(true);
        let interpreted = interpret_label_value_definition(d, Some(labeler()));

        assert_eq!(
            interpreted.behaviors.content.content_view,
            Some(BehaviorAction::Blur)
        );
        assert_eq!(interpreted.flags, vec![LabelFlag::NoSelf, LabelFlag::Adult]);
        assert!(interpreted.adult_only);
    }

    #[test]
    fn no_blur_no_severity_is_inert() {
        let interpreted =
            interpret_label_value_definition(def(Severity::None, Blurs::None), Some(labeler()));
        assert_eq!(interpreted.behaviors, Behaviors::default());
        assert_eq!(interpreted.flags, vec![LabelFlag::NoSelf]);
    }

    #[test]
    fn default_setting_normalization() {
        let mut d = def(Severity::None, Blurs::None);
        assert_eq!(
            interpret_label_value_definition(d.clone(), None).default_setting,
            LabelPreference::Warn
        );

        d.default_setting = Some(LabelPreference::from("bogus"));
        assert_eq!(
            interpret_label_value_definition(d.clone(), None).default_setting,
            LabelPreference::Warn
        );

        d.default_setting = Some(LabelPreference::Hide);
        assert_eq!(
            interpret_label_value_definition(d.clone(), None).default_setting,
            LabelPreference::Hide
        );

        d.default_setting = Some(LabelPreference::Ignore);
        let interpreted = interpret_label_value_definition(d, None);
        assert_eq!(interpreted.default_setting, LabelPreference::Ignore);
        assert!(interpreted.configurable);
    }
}
