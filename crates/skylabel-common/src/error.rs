//! Parsing errors for the validated string types

use miette::SourceSpan;
use smol_str::SmolStr;

/// Parsing error for atproto string types.
///
/// `spec` is the final url path segment on atproto.com/specs describing the type,
/// `input` is the rejected string and `kind` says what was wrong with it.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("error in `{input}`: {kind}")]
#[diagnostic(
    url("https://atproto.com/specs/{spec}"),
    help("check the value against the atproto string format")
)]
pub struct StrError {
    /// Which string format was being parsed
    pub spec: SmolStr,
    /// The rejected input
    #[source_code]
    pub input: String,
    /// What went wrong
    #[source]
    #[diagnostic_source]
    pub kind: StrParseKind,
}

impl StrError {
    /// Input exceeded the maximum length for the format
    pub fn too_long(spec: &'static str, input: &str, max: usize, actual: usize) -> Self {
        Self {
            spec: SmolStr::new_static(spec),
            input: input.to_string(),
            kind: StrParseKind::TooLong { max, actual },
        }
    }

    /// Input didn't match the format's regex
    pub fn regex(spec: &'static str, input: &str, message: SmolStr) -> Self {
        Self {
            spec: SmolStr::new_static(spec),
            input: input.to_string(),
            kind: StrParseKind::RegexFail {
                span: None,
                message,
            },
        }
    }

    /// Input was rejected by the language tag grammar
    pub fn lang(input: &str) -> Self {
        Self {
            spec: SmolStr::new_static("lexicon#language"),
            input: input.to_string(),
            kind: StrParseKind::InvalidLangTag {
                span: Some((0, input.len()).into()),
            },
        }
    }
}

/// The specific reason a string failed to parse
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum StrParseKind {
    /// Regex mismatch
    #[error("regex failure - {message}")]
    #[diagnostic(code(skylabel::types::string::regex_fail))]
    RegexFail {
        /// Offending region, if known
        #[label]
        span: Option<SourceSpan>,
        /// Extra context
        #[help]
        message: SmolStr,
    },
    /// Length over the format's limit
    #[error("string too long (allowed: {max}, actual: {actual})")]
    #[diagnostic(code(skylabel::types::string::wrong_length))]
    TooLong {
        /// Maximum allowed length in bytes
        max: usize,
        /// Actual length in bytes
        actual: usize,
    },
    /// Not a well-formed BCP-47 language tag
    #[error("not a well-formed BCP-47 language tag")]
    #[diagnostic(code(skylabel::types::string::language))]
    InvalidLangTag {
        /// The whole tag
        #[label("here")]
        span: Option<SourceSpan>,
    },
}
