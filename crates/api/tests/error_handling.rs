//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly and need neither a server nor a
//! database.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use taskboard_api::error::AppError;
use taskboard_core::error::CoreError;
use taskboard_core::messages;
use taskboard_db::DbError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_message() {
    let err = AppError::Core(CoreError::Validation(messages::TITLE_IS_REQUIRED.into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], messages::TITLE_IS_REQUIRED);
}

#[tokio::test]
async fn invalid_task_id_returns_400() {
    let err = AppError::Core(CoreError::InvalidId { entity: "Task" });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_ID");
    assert_eq!(json["error"], messages::INVALID_TASK_ID);
}

#[tokio::test]
async fn task_not_found_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Task",
        id: "65f5b2e4c0a5f9a7b3e9d4c2".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], messages::TASK_NOT_FOUND);
}

#[tokio::test]
async fn conflict_returns_400_with_conflict_code() {
    let err = AppError::Core(CoreError::Conflict(
        messages::CATEGORY_ALREADY_EXISTS.into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], messages::CATEGORY_ALREADY_EXISTS);
}

// ---------------------------------------------------------------------------
// HTTP-specific errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

// ---------------------------------------------------------------------------
// Database errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pool_timeout_returns_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn db_error_wrapping_core_error_keeps_its_mapping() {
    let err: AppError = DbError::Core(CoreError::InvalidId { entity: "Task" }).into();

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_ID");
}
