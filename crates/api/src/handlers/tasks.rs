//! Handlers for the `/tasks` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use taskboard_core::error::CoreError;
use taskboard_core::messages;
use taskboard_core::validation::{validate_object_id, validate_task_data};
use taskboard_db::models::task::{CreateTask, Task, TaskFilter, TaskWithCategory, UpdateTask};
use taskboard_db::repositories::{CategoryRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// Reject a category reference that does not resolve to a stored category.
async fn ensure_category_exists(state: &AppState, category: &str) -> AppResult<()> {
    if CategoryRepo::exists_by_id(&state.pool, category).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(
            messages::INVALID_CATEGORY.to_string(),
        )))
    }
}

/// GET /api/tasks
///
/// Optional `status` and `category` query filters; empty values match all.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<TaskFilter>,
) -> AppResult<Json<Vec<TaskWithCategory>>> {
    let tasks = TaskRepo::list(&state.pool, &filter.normalized()).await?;
    Ok(Json(tasks))
}

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    validate_task_data(&input.validation_input(), false)?;

    if let Some(category) = input.category.as_deref() {
        ensure_category_exists(&state, category).await?;
    }

    let task = TaskRepo::create(&state.pool, &input).await?;

    tracing::info!(task_id = %task.id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/tasks/{id}
///
/// Partial update. A malformed id is rejected before the payload is looked
/// at or the store is touched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateTask>,
) -> AppResult<Json<Task>> {
    if !validate_object_id(&id) {
        return Err(AppError::Core(CoreError::InvalidId { entity: "Task" }));
    }

    validate_task_data(&input.validation_input(), true)?;

    if let Some(category) = input.assigned_category() {
        ensure_category_exists(&state, category).await?;
    }

    let task = TaskRepo::update(&state.pool, &id, &input).await?;

    tracing::info!(task_id = %task.id, "Task updated");

    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let task = TaskRepo::delete(&state.pool, &id).await?;

    tracing::info!(task_id = %task.id, "Task deleted");

    Ok(Json(json!({})))
}
