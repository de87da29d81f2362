//! Data models
//!
//! Shared between the catalog API client and the admin workflows.
//! Field renames track the backend's wire format (`_id`, `url`, `coleccion`).

pub mod artwork;

// Re-exports
pub use artwork::*;
