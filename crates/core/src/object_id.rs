//! Record identifiers.
//!
//! Tasks and categories share one identifier format: 12 bytes rendered as
//! 24 lowercase hex characters. The first four bytes are the big-endian
//! creation time in Unix seconds, the remaining eight are random, so ids
//! sort roughly by creation time.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of raw bytes in an identifier.
pub const OBJECT_ID_BYTES: usize = 12;

/// Length of the hex-encoded identifier.
pub const OBJECT_ID_LENGTH: usize = OBJECT_ID_BYTES * 2;

static OBJECT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").expect("valid regex"));

/// Returns `true` iff `id` is a syntactically valid identifier.
///
/// Empty strings, wrong lengths and non-hex characters are all rejected.
/// Both hex cases are accepted; [`ObjectId::parse`] normalizes to lowercase.
pub fn validate_object_id(id: &str) -> bool {
    OBJECT_ID_RE.is_match(id)
}

/// A validated, lowercase, 24-character hex identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    /// Generate a fresh identifier from the current time and random bytes.
    pub fn generate() -> Self {
        let seconds = chrono::Utc::now().timestamp().clamp(0, u32::MAX as i64) as u32;

        let mut bytes = [0u8; OBJECT_ID_BYTES];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        rand::rng().fill(&mut bytes[4..]);

        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Parse an identifier, returning `None` when it is malformed.
    pub fn parse(id: &str) -> Option<Self> {
        validate_object_id(id).then(|| Self(id.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed identifier: {0:?}")]
pub struct ParseObjectIdError(String);

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseObjectIdError(s.to_string()))
    }
}

impl TryFrom<String> for ObjectId {
    type Error = ParseObjectIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}
