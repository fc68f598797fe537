//! Repository for the `tasks` table.

use std::collections::{BTreeSet, HashMap};

use sqlx::PgPool;
use taskboard_core::error::CoreError;
use taskboard_core::messages;
use taskboard_core::object_id::ObjectId;
use taskboard_core::status::TaskStatus;
use taskboard_core::types::Timestamp;
use taskboard_core::validation::parse_due_date;

use crate::error::DbError;
use crate::models::task::{CreateTask, Task, TaskFilter, TaskWithCategory, UpdateTask};
use crate::repositories::CategoryRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, status, due_date, category_id, created_at, updated_at";

const ENTITY: &str = "Task";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// The title is stored trimmed and `status` defaults to `Pending`.
    /// Callers validate first; values that still fail to convert are
    /// rejected with a validation error before the insert.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, DbError> {
        let status = match &input.status {
            Some(raw) => parse_status(raw.as_deref())?,
            None => TaskStatus::default(),
        };
        let due_date = match input.due_date.as_deref() {
            Some(raw) => parse_optional_due_date(raw)?,
            None => None,
        };
        let category_id = match input.category.as_deref() {
            Some(raw) => parse_category_id(raw)?,
            None => None,
        };

        let query = format!(
            "INSERT INTO tasks (id, title, description, status, due_date, category_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(ObjectId::generate().as_str())
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.description)
            .bind(status.as_str())
            .bind(due_date)
            .bind(category_id.as_ref().map(ObjectId::as_str))
            .fetch_one(pool)
            .await?;

        Ok(task)
    }

    /// Find a task by id. Malformed ids yield `None`.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Task>, sqlx::Error> {
        let Some(id) = ObjectId::parse(id) else {
            return Ok(None);
        };

        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id.as_str())
            .fetch_optional(pool)
            .await
    }

    /// List tasks matching the optional `status` / `category` filters,
    /// newest first, with each category reference resolved to its name.
    ///
    /// Names are fetched in one batched lookup after the task query rather
    /// than stored on the task, so a renamed category shows up immediately.
    pub async fn list(
        pool: &PgPool,
        filter: &TaskFilter,
    ) -> Result<Vec<TaskWithCategory>, sqlx::Error> {
        let category = filter.category.as_deref().map(|raw| {
            ObjectId::parse(raw).map_or_else(|| raw.to_string(), ObjectId::into_string)
        });

        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE ($1::TEXT IS NULL OR status = $1)
               AND ($2::TEXT IS NULL OR category_id = $2)
             ORDER BY created_at DESC, id DESC"
        );
        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(filter.status.as_deref())
            .bind(category)
            .fetch_all(pool)
            .await?;

        let category_ids: Vec<String> = tasks
            .iter()
            .filter_map(|t| t.category_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let names: HashMap<String, String> = CategoryRepo::find_names(pool, &category_ids)
            .await?
            .into_iter()
            .collect();

        Ok(tasks
            .into_iter()
            .map(|task| TaskWithCategory::resolve(task, &names))
            .collect())
    }

    /// Apply a partial update, returning the updated row.
    ///
    /// Fails with [`CoreError::InvalidId`] for a malformed id before any
    /// store access, and with [`CoreError::NotFound`] when no task matches.
    /// Only fields present in `patch` are written; `updated_at` is refreshed.
    pub async fn update(pool: &PgPool, id: &str, patch: &UpdateTask) -> Result<Task, DbError> {
        let id = parse_task_id(id)?;

        let status = patch
            .status
            .as_ref()
            .map(|raw| parse_status(raw.as_deref()))
            .transpose()?;
        let due_date = match &patch.due_date {
            Some(Some(raw)) => Some(parse_optional_due_date(raw)?),
            Some(None) => Some(None),
            None => None,
        };
        let category_id = match &patch.category {
            Some(Some(raw)) => Some(parse_category_id(raw)?),
            Some(None) => Some(None),
            None => None,
        };

        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                status = COALESCE($5, status),
                due_date = CASE WHEN $6 THEN $7 ELSE due_date END,
                category_id = CASE WHEN $8 THEN $9 ELSE category_id END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id.as_str())
            .bind(patch.title.as_deref().map(str::trim))
            .bind(patch.description.is_some())
            .bind(patch.description.clone().flatten())
            .bind(status.map(TaskStatus::as_str))
            .bind(due_date.is_some())
            .bind(due_date.flatten())
            .bind(category_id.is_some())
            .bind(category_id.flatten().map(ObjectId::into_string))
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| not_found(&id))
    }

    /// Hard-delete a task, returning the row as it was before removal.
    ///
    /// Same id and not-found semantics as [`TaskRepo::update`].
    pub async fn delete(pool: &PgPool, id: &str) -> Result<Task, DbError> {
        let id = parse_task_id(id)?;

        let query = format!("DELETE FROM tasks WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Task>(&query)
            .bind(id.as_str())
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| not_found(&id))
    }
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn validation(message: &str) -> DbError {
    DbError::Core(CoreError::Validation(message.to_string()))
}

fn not_found(id: &ObjectId) -> DbError {
    DbError::Core(CoreError::NotFound {
        entity: ENTITY,
        id: id.to_string(),
    })
}

fn parse_task_id(raw: &str) -> Result<ObjectId, DbError> {
    ObjectId::parse(raw).ok_or(DbError::Core(CoreError::InvalidId { entity: ENTITY }))
}

/// `None` is an explicit `null`, which no status matches.
fn parse_status(raw: Option<&str>) -> Result<TaskStatus, DbError> {
    raw.and_then(|s| s.parse().ok())
        .ok_or_else(|| validation(messages::INVALID_STATUS_VALUE))
}

/// An empty due date means "no due date".
fn parse_optional_due_date(raw: &str) -> Result<Option<Timestamp>, DbError> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_due_date(raw)
        .map(Some)
        .ok_or_else(|| validation(messages::INVALID_DUE_DATE))
}

fn parse_category_id(raw: &str) -> Result<Option<ObjectId>, DbError> {
    ObjectId::parse(raw.trim())
        .map(Some)
        .ok_or_else(|| validation(messages::INVALID_CATEGORY))
}
