use crud_client::CrudError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(Uuid),

    #[error("Title is required")]
    TitleRequired,

    #[error("Invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error(transparent)]
    Backend(#[from] CrudError),
}

pub type TaskResult<T> = Result<T, TaskError>;
