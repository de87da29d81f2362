//! Galeria Client - HTTP plumbing for the catalog admin
//!
//! Provides the two external collaborators of the admin workflows: the
//! catalog REST API and the image object storage, both behind async traits
//! so the workflows can run against in-memory fakes in tests.

pub mod catalog;
pub mod config;
pub mod error;
pub mod storage;

pub use catalog::{CatalogApi, HttpCatalogClient};
pub use config::{Config, StorageConfig};
pub use error::{ClientError, ClientResult};
pub use storage::{HttpObjectStore, ObjectStore, object_path_from_url};

// Re-export shared types for convenience
pub use shared::models::{Artwork, ArtworkData};
