use serde::{Deserialize, Deserializer, Serialize, de::Error};
use smol_str::SmolStr;
use std::borrow::Cow;
use std::fmt;
use std::{ops::Deref, str::FromStr};

use crate::error::StrError;

/// An IETF language tag.
///
/// Uses the langtag crate for validation, but is stored as a SmolStr for size/avoiding
/// allocations. Matching against language ranges follows RFC 4647 basic filtering,
/// see [`Language::basic_match`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Hash)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Language(SmolStr);

impl Language {
    /// Parses an IETF language tag from the given string.
    pub fn new<T>(lang: &T) -> Result<Self, StrError>
    where
        T: AsRef<str> + ?Sized,
    {
        let tag = langtag::LangTag::new(lang).map_err(|_| StrError::lang(lang.as_ref()))?;
        Ok(Language(SmolStr::new(tag.as_str())))
    }

    /// Parses an IETF language tag from a static string.
    pub fn new_static(lang: &'static str) -> Result<Self, StrError> {
        let tag = langtag::LangTag::new(lang).map_err(|_| StrError::lang(lang))?;
        Ok(Language(SmolStr::new_static(tag.as_str())))
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this tag is selected by the language range `range` under RFC 4647
    /// basic filtering (section 3.3.1).
    ///
    /// `en` selects `en`, `en-US` and `EN-gb`, but `en-US` does not select `en`.
    /// The wildcard range `*` selects every tag.
    pub fn basic_match(&self, range: &str) -> bool {
        basic_filter(self.as_str(), range)
    }
}

/// RFC 4647 basic filtering of one `tag` against one language `range`.
///
/// The range matches when it is `*`, or when its subtags are a case-insensitive
/// prefix of the tag's subtags.
pub fn basic_filter(tag: &str, range: &str) -> bool {
    if range == "*" {
        return true;
    }
    let mut tag_subtags = tag.split('-');
    range.split('-').all(|subtag| {
        tag_subtags
            .next()
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(subtag))
    })
}

impl FromStr for Language {
    type Err = StrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Cow<'de, str> = Deserialize::deserialize(deserializer)?;
        Self::new(&*value).map_err(D::Error::custom)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.0.to_string()
    }
}

impl From<Language> for SmolStr {
    fn from(value: Language) -> Self {
        value.0
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Language {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}
