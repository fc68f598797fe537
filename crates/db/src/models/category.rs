//! Category entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::object_id::ObjectId;
use taskboard_core::types::Timestamp;
use taskboard_core::validation::CategoryInput;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[sqlx(try_from = "String")]
    pub id: ObjectId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
///
/// `name` is optional at the type level so a missing name reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CreateCategory {
    pub fn validation_input(&self) -> CategoryInput<'_> {
        CategoryInput {
            name: self.name.as_deref(),
            description: self.description.as_deref(),
        }
    }
}
