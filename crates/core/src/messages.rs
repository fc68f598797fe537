//! Client-facing error messages.
//!
//! These strings are part of the HTTP contract; existing clients match on them.

pub const TITLE_IS_REQUIRED: &str = "Title is required";
pub const DESCRIPTION_TOO_LONG: &str = "Description cannot exceed 500 characters";
pub const INVALID_STATUS_VALUE: &str = "Invalid status value";
pub const INVALID_DUE_DATE: &str = "Invalid due date";
pub const INVALID_CATEGORY: &str = "Invalid category";
pub const INVALID_TASK_ID: &str = "Invalid task ID";
pub const TASK_NOT_FOUND: &str = "Task not found";
pub const CATEGORY_ALREADY_EXISTS: &str = "Category already exists";
