//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::error::CoreError;
use taskboard_core::messages;
use taskboard_core::validation::validate_category_data;
use taskboard_db::models::category::{Category, CreateCategory};
use taskboard_db::repositories::CategoryRepo;
use taskboard_db::DbError;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

fn already_exists() -> AppError {
    AppError::Core(CoreError::Conflict(
        messages::CATEGORY_ALREADY_EXISTS.to_string(),
    ))
}

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/categories
///
/// Names are unique. An insert that races past the `exists` pre-check
/// still fails on `uq_categories_name` and is reported the same way.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    validate_category_data(&input.validation_input())?;

    let name = input.name.as_deref().unwrap_or_default();
    if CategoryRepo::exists(&state.pool, name).await? {
        return Err(already_exists());
    }

    let category = CategoryRepo::create(&state.pool, &input)
        .await
        .map_err(|err| {
            let err = DbError::from(err);
            if err.is_unique_violation() {
                already_exists()
            } else {
                AppError::from(err)
            }
        })?;

    tracing::info!(category_id = %category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}
