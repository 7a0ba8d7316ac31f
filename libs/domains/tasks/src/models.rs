use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};

/// Well-known status values. The UI never validates against this set;
/// status is a free-form string compared case-insensitively.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_IN_PROGRESS: &str = "in progress";
pub const STATUS_COMPLETED: &str = "completed";

/// Well-known priority values, same caveat as statuses.
pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";

/// Task entity as stored by the CRUD collaborator.
///
/// Field names follow the collaborator's wire shape (`_id`, `dueDate`,
/// `_createdDate`, `_updatedDate`). The two timestamp fields are maintained
/// by the collaborator and never serialized on create/update because the
/// drafts that produce those payloads leave them unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(
        rename = "_createdDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(
        rename = "_updatedDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Case-insensitive status comparison. A task without a status never
    /// matches.
    pub fn status_matches(&self, status: &str) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(status))
    }

    /// The stored due date as a calendar-date input value (`YYYY-MM-DD`),
    /// or empty when unset.
    pub fn due_date_input_value(&self) -> String {
        self.due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Form-shaped task input, shared by the create and edit flows.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "TaskDraft::default_status")]
    pub status: String,
    #[serde(default = "TaskDraft::default_priority")]
    pub priority: String,
    /// Calendar-date input value (`YYYY-MM-DD`); empty means no due date.
    #[serde(default)]
    pub due_date: String,
}

impl TaskDraft {
    fn default_status() -> String {
        STATUS_PENDING.to_string()
    }

    fn default_priority() -> String {
        PRIORITY_MEDIUM.to_string()
    }

    pub fn title_is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// Parse the due-date input value into a timestamp at midnight UTC.
    pub fn parsed_due_date(&self) -> TaskResult<Option<DateTime<Utc>>> {
        let raw = self.due_date.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| TaskError::InvalidDueDate(raw.to_string()))?;
        Ok(Some(date.and_time(NaiveTime::MIN).and_utc()))
    }

    /// Build the record sent to the collaborator, enforcing the one local
    /// invariant: a non-blank title.
    pub fn into_task(self, id: Uuid) -> TaskResult<Task> {
        if self.title_is_blank() {
            return Err(TaskError::TitleRequired);
        }
        let due_date = self.parsed_due_date()?;
        let description = if self.description.trim().is_empty() {
            None
        } else {
            Some(self.description)
        };

        Ok(Task {
            id,
            title: self.title,
            description,
            status: Some(self.status),
            priority: Some(self.priority),
            due_date,
            created_date: None,
            updated_date: None,
        })
    }
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: Self::default_status(),
            priority: Self::default_priority(),
            due_date: String::new(),
        }
    }
}

impl From<&Task> for TaskDraft {
    /// Pre-load a form draft from a stored task, converting the due date to
    /// its calendar-date input value.
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task
                .status
                .clone()
                .unwrap_or_else(Self::default_status),
            priority: task
                .priority
                .clone()
                .unwrap_or_else(Self::default_priority),
            due_date: task.due_date_input_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            ..TaskDraft::default()
        }
    }

    #[test]
    fn test_wire_shape_round_trip() {
        let id = Uuid::new_v4();
        let value = json!({
            "_id": id,
            "title": "Buy milk",
            "status": "pending",
            "priority": "low",
            "dueDate": "2026-09-01T00:00:00Z",
            "_createdDate": "2026-08-01T12:00:00Z",
            "_updatedDate": "2026-08-02T12:00:00Z"
        });

        let task: Task = serde_json::from_value(value).unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.status.as_deref(), Some("pending"));
        assert_eq!(task.due_date_input_value(), "2026-09-01");

        let back = serde_json::to_value(&task).unwrap();
        assert_eq!(back["_id"], json!(id));
        assert_eq!(back["dueDate"], json!("2026-09-01T00:00:00Z"));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let task: Task =
            serde_json::from_value(json!({ "_id": Uuid::new_v4(), "title": "Bare" })).unwrap();
        assert_eq!(task.status, None);
        assert_eq!(task.priority, None);
        assert_eq!(task.due_date, None);
        assert_eq!(task.due_date_input_value(), "");
    }

    #[test]
    fn test_status_matches_is_case_insensitive() {
        let mut task: Task =
            serde_json::from_value(json!({ "_id": Uuid::new_v4(), "title": "t" })).unwrap();
        task.status = Some("In Progress".to_string());

        assert!(task.status_matches("in progress"));
        assert!(task.status_matches("IN PROGRESS"));
        assert!(!task.status_matches("pending"));

        task.status = None;
        assert!(!task.status_matches("pending"));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        for title in ["", "   ", "\t\n"] {
            let err = draft(title).into_task(Uuid::new_v4()).unwrap_err();
            assert!(matches!(err, TaskError::TitleRequired));
        }
    }

    #[test]
    fn test_draft_builds_record_without_timestamps() {
        let mut d = draft("Buy milk");
        d.due_date = "2026-09-01".to_string();
        let task = d.into_task(Uuid::new_v4()).unwrap();

        assert_eq!(task.created_date, None);
        assert_eq!(task.updated_date, None);
        assert_eq!(task.due_date_input_value(), "2026-09-01");

        let record = serde_json::to_value(&task).unwrap();
        assert!(record.get("_createdDate").is_none());
        assert!(record.get("_updatedDate").is_none());
    }

    #[test]
    fn test_empty_due_date_means_none() {
        assert_eq!(draft("t").parsed_due_date().unwrap(), None);
    }

    #[test]
    fn test_invalid_due_date_is_rejected() {
        let mut d = draft("t");
        d.due_date = "tomorrow".to_string();
        assert!(matches!(
            d.parsed_due_date().unwrap_err(),
            TaskError::InvalidDueDate(_)
        ));
    }

    #[test]
    fn test_draft_from_task_preloads_field_values() {
        let task: Task = serde_json::from_value(json!({
            "_id": Uuid::new_v4(),
            "title": "Water plants",
            "description": "Back garden",
            "status": "in progress",
            "priority": "high",
            "dueDate": "2026-09-15T08:30:00Z"
        }))
        .unwrap();

        let d = TaskDraft::from(&task);
        assert_eq!(d.title, "Water plants");
        assert_eq!(d.description, "Back garden");
        assert_eq!(d.status, "in progress");
        assert_eq!(d.priority, "high");
        // Time-of-day is dropped for the calendar-date input
        assert_eq!(d.due_date, "2026-09-15");
    }

    #[test]
    fn test_draft_from_bare_task_uses_form_defaults() {
        let task: Task =
            serde_json::from_value(json!({ "_id": Uuid::new_v4(), "title": "Bare" })).unwrap();
        let d = TaskDraft::from(&task);
        assert_eq!(d.status, STATUS_PENDING);
        assert_eq!(d.priority, PRIORITY_MEDIUM);
        assert_eq!(d.due_date, "");
    }
}
