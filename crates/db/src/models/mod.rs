//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` patch DTO where the entity supports updates

use serde::{Deserialize, Deserializer};

pub mod category;
pub mod task;

/// Deserialize a field that was present in the payload, even if `null`.
///
/// Combined with `#[serde(default)]` on an `Option<Option<T>>` field this
/// yields `None` for an omitted key, `Some(None)` for an explicit `null`
/// and `Some(Some(v))` for a value.
pub(crate) fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
