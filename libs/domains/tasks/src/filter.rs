//! Client-side status filtering and counts.
//!
//! The collaborator is never asked to filter; the list page fetches the full
//! task set and narrows it in memory, exactly once per request.

use crate::models::{Task, STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_PENDING};

/// Status filter selected on the list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Status(String),
}

impl StatusFilter {
    /// Lenient parse of the `?status=` query value. Missing, blank, or
    /// `all` (any case) selects everything; anything else filters by that
    /// status string.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => StatusFilter::All,
            Some(s) if s.eq_ignore_ascii_case("all") => StatusFilter::All,
            Some(s) => StatusFilter::Status(s.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusFilter::All)
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(status) => task.status_matches(status),
        }
    }

    /// Narrow a task set to the tasks this filter selects.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }

    /// The value shown in the filter control and empty-state copy.
    pub fn label(&self) -> &str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Status(status) => status,
        }
    }
}

/// Per-status counts over the full (unfiltered) task set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct TaskCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn tally(tasks: &[Task]) -> Self {
        let count = |status: &str| tasks.iter().filter(|t| t.status_matches(status)).count();
        Self {
            pending: count(STATUS_PENDING),
            in_progress: count(STATUS_IN_PROGRESS),
            completed: count(STATUS_COMPLETED),
        }
    }
}
