//! Template view models.
//!
//! Pages never receive domain types directly; every value is pre-formatted
//! here so the templates stay purely presentational.

use chrono::{DateTime, Utc};
use domain_tasks::Task;
use serde::Serialize;

/// A task as rendered on the list and detail pages.
#[derive(Debug, Serialize)]
pub struct TaskView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    /// CSS-class form of the status (lowercase, dashes for spaces).
    pub status_slug: String,
    pub priority: Option<String>,
    pub priority_slug: String,
    pub due_date: Option<String>,
    pub created_date: Option<String>,
    pub updated_date: Option<String>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.clone(),
            status_slug: slug(task.status.as_deref()),
            priority: task.priority.clone(),
            priority_slug: slug(task.priority.as_deref()),
            due_date: task.due_date.map(friendly_date),
            created_date: task.created_date.map(friendly_date),
            updated_date: task.updated_date.map(friendly_date),
        }
    }
}

fn slug(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .to_ascii_lowercase()
        .replace(' ', "-")
}

fn friendly_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
