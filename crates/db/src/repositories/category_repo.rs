//! Repository for the `categories` table.

use sqlx::PgPool;
use taskboard_core::object_id::{ObjectId, validate_object_id};

use crate::models::category::{Category, CreateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides list, lookup and create operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(pool)
            .await
    }

    /// Returns `true` if a category with exactly this name exists.
    pub async fn exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Check that a task's category reference resolves.
    ///
    /// An empty id means "no category" and passes vacuously. A malformed id
    /// returns `false` without querying the store.
    pub async fn exists_by_id(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(true);
        }
        if !validate_object_id(id) {
            return Ok(false);
        }

        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id.to_ascii_lowercase())
            .fetch_one(pool)
            .await
    }

    /// Insert a new category, returning the created row.
    ///
    /// The name is stored exactly as supplied. A duplicate name fails with the unique
    /// violation on `uq_categories_name`.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(ObjectId::generate().as_str())
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Batch-resolve category names for the given ids.
    ///
    /// Ids with no matching category are simply absent from the result.
    pub async fn find_names(
        pool: &PgPool,
        ids: &[String],
    ) -> Result<Vec<(String, String)>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, (String, String)>("SELECT id, name FROM categories WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
