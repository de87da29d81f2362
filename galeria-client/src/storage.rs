//! Object storage client
//!
//! REST client for the image blob store. Objects live under the logical
//! path `/{tenant}/{namespace}/{filename}`; an upload yields a publicly
//! resolvable download locator that the catalog records carry verbatim.

use crate::{ClientError, ClientResult, config::StorageConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::{decode, encode};

/// Marker preceding the object path inside a download locator
const PATH_MARKER: &str = "/o/";
/// Marker where the locator's query string begins
const QUERY_MARKER: &str = "?alt=";

/// Object storage surface used by the admin workflows
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store the bytes under the configured logical path for `filename`,
    /// tagged with `content_type`, and return the download locator.
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<String>;

    /// Delete the object at the given logical path
    async fn delete(&self, path: &str) -> ClientResult<()>;
}

/// Upload response metadata
#[derive(Debug, Deserialize)]
struct ObjectMetadata {
    name: String,
    #[serde(rename = "downloadTokens")]
    download_tokens: Option<String>,
}

/// HTTP client for the object storage REST API
#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    client: Client,
    base_url: String,
    bucket: String,
    tenant: String,
    namespace: String,
}

impl HttpObjectStore {
    /// Create a new storage client from configuration
    pub fn new(config: &StorageConfig, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
            tenant: config.tenant.clone(),
            namespace: config.namespace.clone(),
        }
    }

    /// Logical path for a file, keyed by its original name
    pub fn object_path(&self, filename: &str) -> String {
        format!("/{}/{}/{}", self.tenant, self.namespace, filename)
    }

    /// Object name as addressed by the REST API (no leading slash)
    fn object_name(path: &str) -> &str {
        path.trim_start_matches('/')
    }

    /// Build the resolvable download locator for an uploaded object
    fn download_url(&self, name: &str, token: &str) -> String {
        format!(
            "{}/b/{}/o/{}?alt=media&token={}",
            self.base_url,
            self.bucket,
            encode(name),
            token
        )
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<String> {
        let path = self.object_path(filename);
        let name = Self::object_name(&path);
        let url = format!(
            "{}/b/{}/o?name={}",
            self.base_url,
            self.bucket,
            encode(name)
        );

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let meta: ObjectMetadata = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        let token = meta.download_tokens.ok_or_else(|| {
            ClientError::InvalidResponse("upload response carried no download token".into())
        })?;

        tracing::debug!(name = %meta.name, "image uploaded");
        Ok(self.download_url(&meta.name, &token))
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = format!(
            "{}/b/{}/o/{}",
            self.base_url,
            self.bucket,
            encode(Self::object_name(path))
        );

        let response = self.client.delete(&url).send().await?;
        let status = response.status();
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

/// Derive the logical object path from a download locator
///
/// Percent-decodes the locator, then takes the segment between the storage
/// path marker and the query marker. A locator without a query string yields
/// the whole remainder.
pub fn object_path_from_url(url: &str) -> ClientResult<String> {
    let decoded =
        decode(url).map_err(|_| ClientError::InvalidLocator(url.to_string()))?;
    let (_, after) = decoded
        .split_once(PATH_MARKER)
        .ok_or_else(|| ClientError::InvalidLocator(url.to_string()))?;
    let path = match after.split_once(QUERY_MARKER) {
        Some((path, _)) => path,
        None => after,
    };
    Ok(path.to_string())
}
