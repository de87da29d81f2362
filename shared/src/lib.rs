//! Shared types for the Galeria catalog admin
//!
//! Common data models exchanged between the catalog API client and the
//! admin workflows.

pub mod models;

// Re-exports
pub use models::{Artwork, ArtworkData};
pub use serde::{Deserialize, Serialize};
