use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrudError {
    #[error("Record '{id}' not found in collection '{collection}'")]
    NotFound { collection: String, id: String },

    #[error("Record has no '_id' field")]
    MissingId,

    #[error("Collaborator request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Collaborator returned {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Failed to decode collaborator response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type CrudResult<T> = Result<T, CrudError>;
