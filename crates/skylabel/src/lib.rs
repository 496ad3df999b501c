//! # skylabel
//!
//! Resolution of AT Protocol moderation labels into display information.
//!
//! A label on a post or account only carries a short value (`porn`, `!hide`,
//! `spoilers`) and the DID of the labeler that applied it. Showing it to a user
//! means finding out what that value *means*: which definition applies (the
//! labeler's own, the built-in global one, or a no-op placeholder), and which of
//! the definition's localized names and descriptions best fits the user's locale.
//!
//! ```
//! use skylabel::moderation::{Label, LabelContext};
//! use skylabel::{Did, Language};
//!
//! let ctx = LabelContext::new()
//!     .locale(Language::new("en-US").unwrap())
//!     .build();
//! let label = Label::new()
//!     .src(Did::new("did:plc:ar7c4by46qjdydhdevvrndac").unwrap())
//!     .uri("at://did:plc:someone/app.bsky.feed.post/3k2a")
//!     .val("porn")
//!     .build();
//!
//! let info = ctx.label_info(&label);
//! assert_eq!(info.strings.name, "Adult Content");
//! assert!(info.definition.defined_by.is_none());
//! ```

#![warn(missing_docs)]

pub use skylabel_common as common;
pub use skylabel_common::{Did, Language, StrError};

/// Moderation label definitions, localized strings and their resolution.
pub mod moderation;
