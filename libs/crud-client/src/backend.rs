use async_trait::async_trait;
use serde_json::Value;

use crate::error::CrudResult;

/// The five-operation contract of the external CRUD collaborator.
///
/// Every operation addresses a named collection and moves raw JSON records.
/// Implementations: [`crate::HttpCrudClient`] for the real service,
/// [`crate::MemoryCrudBackend`] for tests and local development.
#[async_trait]
pub trait CrudBackend: Send + Sync {
    /// Fetch every record in a collection.
    async fn get_all(&self, collection: &str) -> CrudResult<Vec<Value>>;

    /// Fetch a single record by id. A missing record is
    /// [`CrudError::NotFound`](crate::CrudError::NotFound).
    async fn get_by_id(&self, collection: &str, id: &str) -> CrudResult<Value>;

    /// Create a record. The collaborator echoes the stored record back,
    /// with its maintained timestamps filled in.
    async fn create(&self, collection: &str, record: Value) -> CrudResult<Value>;

    /// Update a record; the record carries its own `_id`.
    async fn update(&self, collection: &str, record: Value) -> CrudResult<Value>;

    /// Delete a record by id.
    async fn delete(&self, collection: &str, id: &str) -> CrudResult<()>;
}
