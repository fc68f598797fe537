/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Maximum length, in characters, of task and category descriptions.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
