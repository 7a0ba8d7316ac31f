//! HTTP implementation of the CRUD collaborator contract.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::backend::CrudBackend;
use crate::config::CrudConfig;
use crate::error::{CrudError, CrudResult};

/// `getAll` responses arrive wrapped in an items envelope.
#[derive(Deserialize)]
struct ItemsEnvelope {
    items: Vec<Value>,
}

/// Client for the external generic CRUD REST service.
///
/// Collections live at `{base_url}/{collection}`, individual records at
/// `{base_url}/{collection}/{id}`. All bodies are JSON.
#[derive(Clone)]
pub struct HttpCrudClient {
    client: reqwest::Client,
    config: CrudConfig,
}

impl HttpCrudClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: CrudConfig) -> CrudResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, config })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.config.base_url, collection)
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.config.base_url, collection, id)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    /// Map a non-success response to a `CrudError`, consuming the body for
    /// the error message.
    async fn check(
        &self,
        response: Response,
        collection: &str,
        id: Option<&str>,
    ) -> CrudResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(CrudError::NotFound {
                collection: collection.to_string(),
                id: id.unwrap_or("?").to_string(),
            });
        }

        let message = response.text().await.unwrap_or_default();
        Err(CrudError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CrudBackend for HttpCrudClient {
    async fn get_all(&self, collection: &str) -> CrudResult<Vec<Value>> {
        let request = self.authorize(self.client.get(self.collection_url(collection)));
        let response = self.check(request.send().await?, collection, None).await?;
        let envelope: ItemsEnvelope = serde_json::from_slice(&response.bytes().await?)?;
        Ok(envelope.items)
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> CrudResult<Value> {
        let request = self.authorize(self.client.get(self.record_url(collection, id)));
        let response = self
            .check(request.send().await?, collection, Some(id))
            .await?;
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }

    async fn create(&self, collection: &str, record: Value) -> CrudResult<Value> {
        let request = self
            .authorize(self.client.post(self.collection_url(collection)))
            .json(&record);
        let response = self.check(request.send().await?, collection, None).await?;
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }

    async fn update(&self, collection: &str, record: Value) -> CrudResult<Value> {
        let id = record
            .get("_id")
            .and_then(Value::as_str)
            .ok_or(CrudError::MissingId)?
            .to_string();
        let request = self
            .authorize(self.client.put(self.record_url(collection, &id)))
            .json(&record);
        let response = self
            .check(request.send().await?, collection, Some(&id))
            .await?;
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }

    async fn delete(&self, collection: &str, id: &str) -> CrudResult<()> {
        let request = self.authorize(self.client.delete(self.record_url(collection, id)));
        self.check(request.send().await?, collection, Some(id))
            .await?;
        Ok(())
    }
}
