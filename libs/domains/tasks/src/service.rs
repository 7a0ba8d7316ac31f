//! Task Service - Business logic layer
//!
//! Thin orchestration over the CRUD collaborator: enforces the title
//! invariant, assigns ids on create, converts drafts to wire records, and
//! maps collaborator errors into the domain taxonomy.

use std::sync::Arc;
use tracing::{instrument, warn};
use uuid::Uuid;

use crud_client::{CrudBackend, CrudError};

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskDraft};

/// Collection name under which the collaborator stores tasks.
pub const TASKS_COLLECTION: &str = "tasks";

/// Task service over any collaborator backend.
pub struct TaskService<B: CrudBackend> {
    backend: Arc<B>,
}

impl<B: CrudBackend> TaskService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Fetch every task. Records that no longer decode as tasks are skipped
    /// with a warning; the collaborator's data is not trusted to be clean.
    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        let records = self.backend.get_all(TASKS_COLLECTION).await?;

        let mut tasks = Vec::with_capacity(records.len());
        for record in records {
            match serde_json::from_value::<Task>(record) {
                Ok(task) => tasks.push(task),
                Err(e) => warn!("Skipping undecodable task record: {}", e),
            }
        }
        Ok(tasks)
    }

    /// Fetch a single task by id.
    #[instrument(skip(self))]
    pub async fn get_task(&self, id: Uuid) -> TaskResult<Task> {
        let record = self
            .backend
            .get_by_id(TASKS_COLLECTION, &id.to_string())
            .await
            .map_err(|e| not_found_as(e, id))?;
        decode(record)
    }

    /// Create a task from a draft, assigning a fresh id. The draft's title
    /// invariant is checked before any collaborator call is made.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_task(&self, draft: TaskDraft) -> TaskResult<Task> {
        let task = draft.into_task(Uuid::new_v4())?;
        let record = serde_json::to_value(&task).map_err(CrudError::Decode)?;
        let stored = self.backend.create(TASKS_COLLECTION, record).await?;
        decode(stored)
    }

    /// Update a task with all draft fields. Same title check as create;
    /// no collaborator call is made for a blank title.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn update_task(&self, id: Uuid, draft: TaskDraft) -> TaskResult<Task> {
        let task = draft.into_task(id)?;
        let record = serde_json::to_value(&task).map_err(CrudError::Decode)?;
        let stored = self
            .backend
            .update(TASKS_COLLECTION, record)
            .await
            .map_err(|e| not_found_as(e, id))?;
        decode(stored)
    }

    /// Delete a task by id.
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<()> {
        self.backend
            .delete(TASKS_COLLECTION, &id.to_string())
            .await
            .map_err(|e| not_found_as(e, id))?;
        Ok(())
    }
}

impl<B: CrudBackend> Clone for TaskService<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

fn decode(record: serde_json::Value) -> TaskResult<Task> {
    serde_json::from_value(record).map_err(|e| TaskError::Backend(CrudError::Decode(e)))
}

fn not_found_as(err: CrudError, id: Uuid) -> TaskError {
    match err {
        CrudError::NotFound { .. } => TaskError::NotFound(id),
        other => TaskError::Backend(other),
    }
}
