//! Workflow error types

use galeria_client::ClientError;
use thiserror::Error;

/// Workflow error type
///
/// Upload and API failures abort the running workflow and leave form state
/// untouched so the user can retry. Storage-delete failures never appear
/// here; the deletion workflow logs and continues.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Image upload rejected or failed mid-transfer
    #[error("image upload failed: {0}")]
    Upload(#[source] ClientError),

    /// Catalog API call failed
    #[error("catalog request failed: {0}")]
    Api(#[source] ClientError),

    /// Another mutation is still unresolved
    #[error("another operation is in flight")]
    Busy,

    /// Edit submitted while the editor is hidden
    #[error("no record is being edited")]
    NoEditTarget,

    /// Record id is not present in the listing
    #[error("record not listed: {0}")]
    UnknownRecord(String),

    /// Catalog endpoint is not configured
    #[error("catalog endpoint is not configured")]
    NotConfigured,
}

/// Result type for workflow operations
pub type WorkflowResult<T> = Result<T, WorkflowError>;
