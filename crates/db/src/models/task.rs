//! Task entity model and DTOs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::object_id::ObjectId;
use taskboard_core::status::TaskStatus;
use taskboard_core::types::Timestamp;
use taskboard_core::validation::TaskInput;

use super::deserialize_present;

/// A row from the `tasks` table.
///
/// `category_id` is serialized as `category` and carries the raw id.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[sqlx(try_from = "String")]
    pub id: ObjectId,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: TaskStatus,
    pub due_date: Option<Timestamp>,
    #[serde(rename = "category")]
    pub category_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Category reference resolved at read time.
///
/// `name` is `None` when the referenced category no longer resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: Option<String>,
}

/// A task as returned by listing, with its category name joined in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithCategory {
    pub id: ObjectId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<Timestamp>,
    pub category: Option<CategoryRef>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TaskWithCategory {
    /// Attach the category name from `names` (category id -> name).
    pub fn resolve(task: Task, names: &HashMap<String, String>) -> Self {
        let category = task.category_id.map(|id| CategoryRef {
            name: names.get(&id).cloned(),
            id,
        });

        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            due_date: task.due_date,
            category,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// DTO for creating a new task.
///
/// Every field arrives as raw text so that bad values are reported by
/// validation with a specific message rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Defaults to `Pending` if omitted; an explicit `null` is invalid.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub status: Option<Option<String>>,
    pub due_date: Option<String>,
    pub category: Option<String>,
}

impl CreateTask {
    pub fn validation_input(&self) -> TaskInput<'_> {
        TaskInput {
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            status: self.status.as_ref().map(Option::as_deref),
            due_date: self.due_date.as_deref(),
            category: self.category.as_deref(),
        }
    }
}

/// Patch DTO for updating a task.
///
/// Nullable columns use `Option<Option<T>>`: an omitted key leaves the
/// column unchanged, `null` clears it. `title` is not nullable, so `null`
/// for it is the same as omitting it. `status` keeps an explicit `null` so
/// validation can reject it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub due_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub category: Option<Option<String>>,
}

impl UpdateTask {
    pub fn validation_input(&self) -> TaskInput<'_> {
        TaskInput {
            title: self.title.as_deref(),
            description: self.description.as_ref().and_then(Option::as_deref),
            status: self.status.as_ref().map(Option::as_deref),
            due_date: self.due_date.as_ref().and_then(Option::as_deref),
            category: self.category.as_ref().and_then(Option::as_deref),
        }
    }

    /// The category id this patch assigns, if it assigns a non-empty one.
    pub fn assigned_category(&self) -> Option<&str> {
        self.category
            .as_ref()
            .and_then(Option::as_deref)
            .filter(|c| !c.trim().is_empty())
    }
}

/// Optional filters for listing tasks (`?status=&category=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub category: Option<String>,
}

impl TaskFilter {
    /// Drop empty filter values so `?status=` matches everything.
    pub fn normalized(self) -> Self {
        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            status: non_empty(self.status),
            category: non_empty(self.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_distinguishes_omitted_from_null() {
        let patch: UpdateTask = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.due_date, None);
        assert_eq!(patch.category, None);

        let patch: UpdateTask = serde_json::from_str(r#"{"dueDate": "2025-12-31"}"#).unwrap();
        assert_eq!(patch.due_date, Some(Some("2025-12-31".to_string())));
        assert_eq!(patch.description, None);
    }

    #[test]
    fn patch_null_fields_are_not_validated() {
        let patch: UpdateTask =
            serde_json::from_str(r#"{"description": null, "category": null}"#).unwrap();
        let input = patch.validation_input();
        assert!(input.description.is_none());
        assert!(input.category.is_none());
        assert!(patch.assigned_category().is_none());
    }

    #[test]
    fn assigned_category_ignores_blank_values() {
        let patch: UpdateTask = serde_json::from_str(r#"{"category": "  "}"#).unwrap();
        assert!(patch.assigned_category().is_none());
        assert_eq!(patch.validation_input().category, Some("  "));
    }

    #[test]
    fn create_accepts_camel_case_due_date() {
        let input: CreateTask =
            serde_json::from_str(r#"{"title": "Test Task", "dueDate": "2025-12-31"}"#).unwrap();
        assert_eq!(input.due_date.as_deref(), Some("2025-12-31"));
        assert!(input.status.is_none());
    }

    #[test]
    fn explicit_null_status_is_kept_for_validation() {
        let input: CreateTask =
            serde_json::from_str(r#"{"title": "Test Task", "status": null}"#).unwrap();
        assert_eq!(input.status, Some(None));
        assert_eq!(input.validation_input().status, Some(None));

        let patch: UpdateTask = serde_json::from_str(r#"{"status": "Completed"}"#).unwrap();
        assert_eq!(patch.validation_input().status, Some(Some("Completed")));
    }

    #[test]
    fn filter_drops_empty_values() {
        let filter = TaskFilter {
            status: Some(String::new()),
            category: Some("65f5b2e4c0a5f9a7b3e9d4c2".to_string()),
        }
        .normalized();
        assert!(filter.status.is_none());
        assert!(filter.category.is_some());
    }

    #[test]
    fn resolve_attaches_category_name() {
        let now = chrono::Utc::now();
        let task = Task {
            id: ObjectId::generate(),
            title: "Write report".to_string(),
            description: None,
            status: TaskStatus::Pending,
            due_date: None,
            category_id: Some("65f5b2e4c0a5f9a7b3e9d4c2".to_string()),
            created_at: now,
            updated_at: now,
        };
        let names = HashMap::from([("65f5b2e4c0a5f9a7b3e9d4c2".to_string(), "Work".to_string())]);

        let resolved = TaskWithCategory::resolve(task, &names);
        assert_eq!(
            resolved.category,
            Some(CategoryRef {
                id: "65f5b2e4c0a5f9a7b3e9d4c2".to_string(),
                name: Some("Work".to_string()),
            })
        );

        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["category"]["name"], "Work");
        assert!(json.get("dueDate").is_some());
    }
}
