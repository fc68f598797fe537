use taskboard_core::error::CoreError;

/// Errors returned by repository operations.
///
/// Domain failures (malformed id, missing row, bad field value) are kept
/// apart from store failures so the API layer can map them to distinct
/// status codes.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// Returns `true` if this error is a unique constraint violation
    /// (PostgreSQL SQLSTATE 23505).
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DbError::Sqlx(sqlx::Error::Database(db_err)) => db_err.code().as_deref() == Some("23505"),
            _ => false,
        }
    }
}
