//! Client configuration

/// Object storage configuration
///
/// Logical object paths follow `/{tenant}/{namespace}/{filename}`.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage REST base URL (e.g. "https://firebasestorage.googleapis.com/v0")
    pub base_url: String,
    /// Storage bucket name
    pub bucket: String,
    /// Tenant segment of the logical path
    pub tenant: String,
    /// Gallery namespace segment of the logical path
    pub namespace: String,
}

/// Configuration for the catalog admin clients
///
/// # Environment variables
///
/// | Variable | Default | Notes |
/// |----------|---------|-------|
/// | CATALOG_API_URL | unset | Catalog REST base URL; unset disables the listing fetch |
/// | STORAGE_BASE_URL | https://firebasestorage.googleapis.com/v0 | Object storage REST base |
/// | STORAGE_BUCKET | mujeresquemehabitan.appspot.com | Storage bucket |
/// | STORAGE_TENANT | shirley | Logical path tenant segment |
/// | STORAGE_NAMESPACE | mujeresquemehabitan | Logical path namespace segment |
/// | REQUEST_TIMEOUT_SECS | 30 | HTTP request timeout |
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog API base URL; `None` leaves the catalog feature disabled
    pub catalog_api_url: Option<String>,
    /// Object storage settings
    pub storage: StorageConfig,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults; a missing catalog URL is a
    /// valid state, not an error.
    pub fn from_env() -> Self {
        Self {
            catalog_api_url: std::env::var("CATALOG_API_URL").ok(),
            storage: StorageConfig {
                base_url: std::env::var("STORAGE_BASE_URL")
                    .unwrap_or_else(|_| "https://firebasestorage.googleapis.com/v0".into()),
                bucket: std::env::var("STORAGE_BUCKET")
                    .unwrap_or_else(|_| "mujeresquemehabitan.appspot.com".into()),
                tenant: std::env::var("STORAGE_TENANT").unwrap_or_else(|_| "shirley".into()),
                namespace: std::env::var("STORAGE_NAMESPACE")
                    .unwrap_or_else(|_| "mujeresquemehabitan".into()),
            },
            timeout: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Set the catalog API base URL
    pub fn with_catalog_api_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_api_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a catalog client from this configuration, if an API URL is set
    pub fn build_catalog_client(&self) -> Option<super::HttpCatalogClient> {
        self.catalog_api_url
            .as_deref()
            .map(|url| super::HttpCatalogClient::new(url, self.timeout))
    }

    /// Create an object storage client from this configuration
    pub fn build_object_store(&self) -> super::HttpObjectStore {
        super::HttpObjectStore::new(&self.storage, self.timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
