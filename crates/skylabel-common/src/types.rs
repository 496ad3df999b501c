/// Decentralized identifiers, as used for label sources and labeler accounts.
pub mod did;
/// IETF language tags and BCP-47 basic filtering.
pub mod language;
