//! Common types for skylabel: validated atproto strings and language tag matching

#![warn(missing_docs)]
pub use smol_str;

pub mod error;
/// Baseline AT Protocol string types used by label resolution.
pub mod types;

pub use error::{StrError, StrParseKind};
pub use types::{did::Did, language::Language};
