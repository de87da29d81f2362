//! Catalog API client
//!
//! REST client for the artwork catalog backend. The backend exposes the
//! full-record CRUD surface only; there is no pagination or partial update.

use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::models::{Artwork, ArtworkData};
use urlencoding::encode;

/// Catalog API surface used by the admin workflows
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the entire catalog, in server-return order
    async fn list(&self) -> ClientResult<Vec<Artwork>>;
    /// Create a record; the backend assigns the id
    async fn create(&self, data: &ArtworkData) -> ClientResult<Artwork>;
    /// Replace a record's fields wholesale
    async fn update(&self, id: &str, data: &ArtworkData) -> ClientResult<Artwork>;
    /// Delete a record by id
    async fn delete(&self, id: &str) -> ClientResult<()>;
}

/// HTTP client for the catalog REST API
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Create a new catalog client against the given base URL
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list(&self) -> ClientResult<Vec<Artwork>> {
        let response = self.client.get(&self.base_url).send().await?;
        Self::handle_response(response).await
    }

    async fn create(&self, data: &ArtworkData) -> ClientResult<Artwork> {
        let url = format!("{}/create", self.base_url);
        let response = self.client.post(&url).json(data).send().await?;
        Self::handle_response(response).await
    }

    async fn update(&self, id: &str, data: &ArtworkData) -> ClientResult<Artwork> {
        let url = format!("{}/{}", self.base_url, encode(id));
        let response = self.client.put(&url).json(data).send().await?;
        Self::handle_response(response).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        let url = format!("{}/{}", self.base_url, encode(id));
        let response = self.client.delete(&url).send().await?;
        let status = response.status();

        // 204 on success; any body is ignored
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(())
    }
}
