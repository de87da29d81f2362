//! Galeria Admin - catalog management workflows
//!
//! Coordinates the two external collaborators (image object storage and the
//! catalog REST API) with local form state:
//!
//! - **Creation**: stage the selected image, compose the record, submit,
//!   reset the form, reload the listing.
//! - **Edit**: modal editor state machine; a submit without a replacement
//!   image carries the record's stored locator forward unchanged.
//! - **Deletion**: two-step confirmation per record; the image delete is
//!   best-effort, the record delete is not.
//! - **Listing**: full re-fetch after create/edit; in-place removal on delete.
//!
//! All workflows run through [`AdminSession`], which owns the injected
//! clients and an explicit in-flight flag guarding against double submission.

pub mod confirm;
pub mod draft;
pub mod editor;
pub mod error;
pub mod listing;
pub mod logger;
pub mod session;
pub mod upload;

pub use confirm::{CONFIRM_WINDOW, ClickOutcome, DeleteConfirm};
pub use draft::{ArtworkDraft, DEFAULT_ARTIST};
pub use editor::Editor;
pub use error::{WorkflowError, WorkflowResult};
pub use listing::Listing;
pub use logger::init_logger;
pub use session::{AdminSession, DeleteOutcome};
pub use upload::{ImageFile, MAX_IMAGE_BYTES, stage_image};

// Re-export the collaborator seams and models for convenience
pub use galeria_client::{CatalogApi, ObjectStore};
pub use shared::models::{Artwork, ArtworkData};
