//! In-memory implementation of the CRUD collaborator contract.
//!
//! Used by tests and local development. Mirrors the collaborator's
//! responsibilities: id assignment when a record arrives without one, and
//! maintenance of the `_createdDate` / `_updatedDate` timestamps.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::CrudBackend;
use crate::error::{CrudError, CrudResult};

type Collections = HashMap<String, HashMap<String, Value>>;

/// Collaborator stand-in backed by a process-local map.
///
/// Cloning shares the underlying store, so a test can seed records through
/// one handle and serve requests through another.
#[derive(Clone, Default)]
pub struct MemoryCrudBackend {
    collections: Arc<RwLock<Collections>>,
}

impl MemoryCrudBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn record_id(record: &Value) -> Option<String> {
        record.get("_id").and_then(Value::as_str).map(str::to_owned)
    }
}

#[async_trait]
impl CrudBackend for MemoryCrudBackend {
    async fn get_all(&self, collection: &str) -> CrudResult<Vec<Value>> {
        let collections = self.collections.read().await;
        let mut records: Vec<Value> = collections
            .get(collection)
            .map(|c| c.values().cloned().collect())
            .unwrap_or_default();
        // Stable order: oldest first, matching the collaborator
        records.sort_by_key(|r| {
            r.get("_createdDate")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        });
        Ok(records)
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> CrudResult<Value> {
        let collections = self.collections.read().await;
        collections
            .get(collection)
            .and_then(|c| c.get(id))
            .cloned()
            .ok_or_else(|| CrudError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })
    }

    async fn create(&self, collection: &str, mut record: Value) -> CrudResult<Value> {
        let id = Self::record_id(&record).unwrap_or_else(|| Uuid::new_v4().to_string());
        let now = json!(Utc::now());
        if let Some(map) = record.as_object_mut() {
            map.insert("_id".to_string(), json!(id));
            map.insert("_createdDate".to_string(), now.clone());
            map.insert("_updatedDate".to_string(), now);
        }

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, collection: &str, mut record: Value) -> CrudResult<Value> {
        let id = Self::record_id(&record).ok_or(CrudError::MissingId)?;

        let mut collections = self.collections.write().await;
        let stored = collections
            .get_mut(collection)
            .and_then(|c| c.get_mut(&id))
            .ok_or_else(|| CrudError::NotFound {
                collection: collection.to_string(),
                id: id.clone(),
            })?;

        let created = stored.get("_createdDate").cloned();
        if let Some(map) = record.as_object_mut() {
            if let Some(created) = created {
                map.insert("_createdDate".to_string(), created);
            }
            map.insert("_updatedDate".to_string(), json!(Utc::now()));
        }
        *stored = record.clone();
        Ok(record)
    }

    async fn delete(&self, collection: &str, id: &str) -> CrudResult<()> {
        let mut collections = self.collections.write().await;
        collections
            .get_mut(collection)
            .and_then(|c| c.remove(id))
            .ok_or_else(|| CrudError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let backend = MemoryCrudBackend::new();
        let created = backend
            .create("tasks", json!({ "title": "Buy milk" }))
            .await
            .unwrap();

        assert!(created.get("_id").and_then(Value::as_str).is_some());
        assert!(created.get("_createdDate").is_some());
        assert!(created.get("_updatedDate").is_some());
    }

    #[tokio::test]
    async fn test_create_keeps_client_supplied_id() {
        let backend = MemoryCrudBackend::new();
        let created = backend
            .create("tasks", json!({ "_id": "abc", "title": "Buy milk" }))
            .await
            .unwrap();

        assert_eq!(created["_id"], json!("abc"));
        let fetched = backend.get_by_id("tasks", "abc").await.unwrap();
        assert_eq!(fetched["title"], json!("Buy milk"));
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found() {
        let backend = MemoryCrudBackend::new();
        let err = backend.get_by_id("tasks", "nope").await.unwrap_err();
        assert!(matches!(err, CrudError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_preserves_created_date() {
        let backend = MemoryCrudBackend::new();
        let created = backend
            .create("tasks", json!({ "_id": "t1", "title": "Before" }))
            .await
            .unwrap();

        let updated = backend
            .update("tasks", json!({ "_id": "t1", "title": "After" }))
            .await
            .unwrap();

        assert_eq!(updated["title"], json!("After"));
        assert_eq!(updated["_createdDate"], created["_createdDate"]);
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let backend = MemoryCrudBackend::new();
        let err = backend
            .update("tasks", json!({ "_id": "ghost", "title": "x" }))
            .await
            .unwrap_err();
        assert!(matches!(err, CrudError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let backend = MemoryCrudBackend::new();
        backend
            .create("tasks", json!({ "_id": "t1", "title": "x" }))
            .await
            .unwrap();

        backend.delete("tasks", "t1").await.unwrap();
        assert!(backend.get_all("tasks").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let backend = MemoryCrudBackend::new();
        let clone = backend.clone();
        backend
            .create("tasks", json!({ "_id": "t1", "title": "shared" }))
            .await
            .unwrap();

        assert_eq!(clone.get_all("tasks").await.unwrap().len(), 1);
    }
}
