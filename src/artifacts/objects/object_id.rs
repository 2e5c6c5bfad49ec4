//! Git object identifier
//!
//! Object ids are hexadecimal hashes: 40 characters in SHA-1 repositories,
//! 64 in SHA-256 ones. The short form is the first 7 characters.

use crate::artifacts::objects::{SHA1_ID_LENGTH, SHA256_ID_LENGTH, SHORT_ID_LENGTH};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object id
    ///
    /// Accepts upper or lower case hex, normalised to lower case.
    pub fn try_parse(id: impl AsRef<str>) -> anyhow::Result<Self> {
        let id = id.as_ref().trim();

        if id.len() != SHA1_ID_LENGTH && id.len() != SHA256_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    pub fn to_short_oid(&self) -> String {
        self.0.split_at(SHORT_ID_LENGTH).0.to_string()
    }
}

impl FromStr for ObjectId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
