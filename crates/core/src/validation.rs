//! Payload validation for tasks and categories.
//!
//! Each check runs in a fixed order and the first failure wins; errors are
//! never aggregated. All functions are pure so handlers can run them before
//! touching the store.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::messages;
use crate::status::TaskStatus;
use crate::types::{Timestamp, MAX_DESCRIPTION_LENGTH};

pub use crate::object_id::validate_object_id;

/// Borrowed view over the fields of a task create or patch payload.
///
/// `None` means the field was not supplied (or was explicitly `null` in a
/// patch, which clears it and so has nothing to validate). `status` cannot be
/// cleared, so an explicit `null` is kept as `Some(None)` and rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskInput<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub status: Option<Option<&'a str>>,
    pub due_date: Option<&'a str>,
    pub category: Option<&'a str>,
}

/// Borrowed view over the fields of a category create payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryInput<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
}

fn invalid(message: &str) -> CoreError {
    CoreError::Validation(message.to_string())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn description_too_long(description: Option<&str>) -> bool {
    description.is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LENGTH)
}

/// Validate a task payload.
///
/// With `is_update == false` a non-blank title is required. Updates do not
/// check the title.
pub fn validate_task_data(input: &TaskInput<'_>, is_update: bool) -> Result<(), CoreError> {
    if !is_update && input.title.is_none_or(is_blank) {
        return Err(invalid(messages::TITLE_IS_REQUIRED));
    }

    if description_too_long(input.description) {
        return Err(invalid(messages::DESCRIPTION_TOO_LONG));
    }

    if let Some(status) = input.status {
        if status.is_none_or(|s| s.parse::<TaskStatus>().is_err()) {
            return Err(invalid(messages::INVALID_STATUS_VALUE));
        }
    }

    if let Some(due_date) = input.due_date {
        if !due_date.is_empty() && parse_due_date(due_date).is_none() {
            return Err(invalid(messages::INVALID_DUE_DATE));
        }
    }

    if input.category.is_some_and(is_blank) {
        return Err(invalid(messages::INVALID_CATEGORY));
    }

    Ok(())
}

/// Validate a category payload: non-blank name, bounded description.
pub fn validate_category_data(input: &CategoryInput<'_>) -> Result<(), CoreError> {
    if input.name.is_none_or(is_blank) {
        return Err(invalid(messages::TITLE_IS_REQUIRED));
    }

    if description_too_long(input.description) {
        return Err(invalid(messages::DESCRIPTION_TOO_LONG));
    }

    Ok(())
}

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a due date supplied by a client.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DD[T ]HH:MM:SS[.fff]`
/// timestamps (taken as UTC) and bare `YYYY-MM-DD` or `YYYY/MM/DD` dates
/// (midnight UTC).
pub fn parse_due_date(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    Some(naive.and_utc())
}
