//! Moderation label definitions and their display strings
//!
//! Labels are applied to content and accounts by labeler services. A label only
//! carries a short value and the DID of the labeler that emitted it, so showing
//! it to a user takes two lookups:
//!
//! - **Definition**: what the value means, via [`resolve_definition`]. A labeler's
//!   own published definition wins, then the built-in [global definitions](global_label),
//!   and anything else resolves to an inert placeholder scoped to the labeler.
//! - **Strings**: a name and description in the user's language, via
//!   [`resolve_strings`]. Global values use the host's [`GlobalLabelStrings`];
//!   labeler values pick from their published locales using BCP-47 basic filtering.
//!
//! Both are pure and total, cheap enough to call per label on every render.
//! [`LabelContext`] bundles the inputs for the common case.
//!
//! # Example
//!
//! ```
//! use skylabel::moderation::{Label, LabelContext, LabelerDefs};
//! use skylabel::{Did, Language};
//!
//! let defs = LabelerDefs::from_json(r#"{
//!     "did:plc:labeler": [{
//!         "identifier": "spoilers",
//!         "severity": "inform",
//!         "blurs": "content",
//!         "locales": [
//!             { "lang": "en", "name": "Spoilers", "description": "Plot details ahead" },
//!             { "lang": "fr", "name": "Divulgâcheur", "description": "Détails de l'intrigue" }
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! let ctx = LabelContext::new()
//!     .locale(Language::new("fr-CA").unwrap())
//!     .defs(defs)
//!     .build();
//! let label = Label::new()
//!     .src(Did::new("did:plc:labeler").unwrap())
//!     .uri("at://did:plc:author/app.bsky.feed.post/3k2a")
//!     .val("spoilers")
//!     .build();
//!
//! assert_eq!(ctx.label_info(&label).strings.name, "Divulgâcheur");
//! ```

mod defs;
mod info;
mod interpret;
mod labeler;
mod registry;
mod resolve;
mod strings;
mod types;


pub use defs::{DefsError, LabelerDefs};
pub use info::{LabelContext, LabelInfo, label_info};
pub use interpret::interpret_label_value_definition;
pub use labeler::{
    LabelerCreator, LabelerPolicies, LabelerProfile, LabelerView, ServicesResponse, find_labeler,
};
pub use registry::{global_label, global_labels};
pub use resolve::{resolve_definition, resolve_strings};
pub use strings::GlobalLabelStrings;
pub use types::{
    BehaviorAction, Behaviors, Blurs, InterpretedLabelValueDefinition, Label, LabelFlag,
    LabelPreference, LabelValueDefinition, LocalizedStrings, ModerationBehavior, Severity,
};
