//! Request extractors whose rejections go through [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body.
///
/// Wraps [`axum::Json`] so that malformed JSON, a field of the wrong type or
/// a missing `Content-Type: application/json` header is answered with the
/// usual `{"error", "code"}` body and status 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
