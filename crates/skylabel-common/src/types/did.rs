use crate::error::StrError;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, de::Error};
use smol_str::SmolStr;
use std::borrow::Borrow;
use std::fmt;
use std::sync::LazyLock;
use std::{ops::Deref, str::FromStr};

/// A decentralized identifier, e.g. `did:plc:ar7c4by46qjdydhdevvrndac`.
///
/// Labels name their issuing labeler by DID, and labeler-defined label values are
/// scoped to the DID that published them.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Hash)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Did(SmolStr);

/// Regex for DID validation per AT Protocol spec.
///
/// Allows `%` in the identifier but not as the final character, and does not check
/// that percent-encoding is well-formed.
pub static DID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^did:[a-z]+:[a-zA-Z0-9._:%-]*[a-zA-Z0-9._-]$").unwrap());

const MAX_DID_LEN: usize = 2048;

fn validate(did: &str) -> Result<&str, StrError> {
    let did = did.strip_prefix("at://").unwrap_or(did);
    if did.len() > MAX_DID_LEN {
        Err(StrError::too_long("did", did, MAX_DID_LEN, did.len()))
    } else if !DID_REGEX.is_match(did) {
        Err(StrError::regex("did", did, SmolStr::new_static("invalid")))
    } else {
        Ok(did)
    }
}

impl Did {
    /// Fallible constructor, validates. Strips a leading `at://`.
    pub fn new(did: impl AsRef<str>) -> Result<Self, StrError> {
        validate(did.as_ref()).map(|did| Self(SmolStr::new(did)))
    }

    /// Fallible constructor for string literals, doesn't allocate.
    pub fn new_static(did: &'static str) -> Result<Self, StrError> {
        validate(did).map(|did| Self(SmolStr::new_static(did)))
    }

    /// Returns the DID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Did {
    type Err = StrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Did {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: std::borrow::Cow<'de, str> = Deserialize::deserialize(deserializer)?;
        Self::new(value).map_err(D::Error::custom)
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at://{}", self.0)
    }
}

impl From<Did> for String {
    fn from(value: Did) -> Self {
        value.0.to_string()
    }
}

impl From<Did> for SmolStr {
    fn from(value: Did) -> Self {
        value.0
    }
}

impl AsRef<str> for Did {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Did {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Did {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}
