//! Admin session
//!
//! Owns the injected collaborator handles and drives the four workflows.
//! The storage handle is constructed once at startup and shared by every
//! workflow through this session; nothing reaches for a global.
//!
//! Ordering invariants:
//! - creation and edit upload the image *before* composing the record, so a
//!   persisted locator always points at an existing object;
//! - deletion attempts the image delete first but deletes the record
//!   regardless of that outcome (an orphaned image is acceptable, an
//!   image-less record is not).

use std::collections::HashMap;

use galeria_client::{CatalogApi, ObjectStore, object_path_from_url};
use shared::models::Artwork;

use crate::confirm::{ClickOutcome, DeleteConfirm};
use crate::draft::ArtworkDraft;
use crate::editor::Editor;
use crate::error::{WorkflowError, WorkflowResult};
use crate::listing::Listing;
use crate::upload::stage_image;

/// Outcome of a delete click on a listed record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// First click (or a click after the window lapsed); nothing deleted yet
    ConfirmationPending,
    /// The record and (best-effort) its image are gone
    Deleted,
}

/// Catalog admin session
///
/// `catalog` is optional: without a configured endpoint the listing stays
/// empty and mutations fail fast with [`WorkflowError::NotConfigured`].
pub struct AdminSession<S, C> {
    storage: S,
    catalog: Option<C>,
    draft: ArtworkDraft,
    listing: Listing,
    confirms: HashMap<String, DeleteConfirm>,
    in_flight: bool,
}

impl<S: ObjectStore, C: CatalogApi> AdminSession<S, C> {
    /// Create a session around the injected collaborator handles
    pub fn new(storage: S, catalog: Option<C>) -> Self {
        Self {
            storage,
            catalog,
            draft: ArtworkDraft::default(),
            listing: Listing::default(),
            confirms: HashMap::new(),
            in_flight: false,
        }
    }

    /// The creation form's field state
    pub fn draft(&self) -> &ArtworkDraft {
        &self.draft
    }

    /// Mutable access to the creation form's field state
    pub fn draft_mut(&mut self) -> &mut ArtworkDraft {
        &mut self.draft
    }

    /// The in-memory listing
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Whether a mutation is currently unresolved
    ///
    /// Interfaces should disable submission while this is set; attempting a
    /// mutation anyway fails with [`WorkflowError::Busy`].
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Fetch the catalog and replace the listing
    ///
    /// A missing catalog endpoint is a valid state: the fetch is skipped
    /// and the listing left as-is.
    pub async fn refresh(&mut self) -> WorkflowResult<()> {
        let Some(catalog) = self.catalog.as_ref() else {
            tracing::debug!("catalog endpoint not configured; skipping listing fetch");
            return Ok(());
        };

        let artworks = catalog.list().await.map_err(WorkflowError::Api)?;
        tracing::debug!(count = artworks.len(), "catalog fetched");
        self.listing.replace(artworks);
        Ok(())
    }

    /// Creation workflow: stage image, compose, submit, reset, reload
    ///
    /// On failure the draft is left untouched so the user can retry.
    pub async fn create_artwork(&mut self) -> WorkflowResult<Artwork> {
        if self.in_flight {
            return Err(WorkflowError::Busy);
        }
        self.in_flight = true;
        let result = self.create_inner().await;
        self.in_flight = false;
        result
    }

    async fn create_inner(&mut self) -> WorkflowResult<Artwork> {
        let catalog = self.catalog.as_ref().ok_or(WorkflowError::NotConfigured)?;

        let image_url = match self.draft.image() {
            Some(file) => stage_image(&self.storage, file)
                .await
                .map_err(WorkflowError::Upload)?
                .unwrap_or_default(),
            None => String::new(),
        };

        let data = self.draft.compose(image_url);
        let created = catalog.create(&data).await.map_err(WorkflowError::Api)?;
        tracing::info!(id = %created.id, title = %created.title, "artwork created");

        self.draft.reset();

        let artworks = catalog.list().await.map_err(WorkflowError::Api)?;
        self.listing.replace(artworks);
        Ok(created)
    }

    /// Open the edit modal on a record
    pub fn open_editor(&self, artwork: &Artwork) -> Editor {
        Editor::open(artwork)
    }

    /// Edit workflow: stage replacement image, submit the full record,
    /// close the editor, reload
    ///
    /// Without a replacement image (or when the replacement is over the
    /// upload limit) the original record's locator is carried forward
    /// unchanged. On failure the editor stays open with values intact.
    pub async fn submit_edit(&mut self, editor: &mut Editor) -> WorkflowResult<Artwork> {
        if self.in_flight {
            return Err(WorkflowError::Busy);
        }
        self.in_flight = true;
        let result = self.submit_edit_inner(editor).await;
        self.in_flight = false;
        result
    }

    async fn submit_edit_inner(&mut self, editor: &mut Editor) -> WorkflowResult<Artwork> {
        let catalog = self.catalog.as_ref().ok_or(WorkflowError::NotConfigured)?;
        let Editor::Open { original, draft } = &*editor else {
            return Err(WorkflowError::NoEditTarget);
        };

        let image_url = match draft.image() {
            Some(file) => stage_image(&self.storage, file)
                .await
                .map_err(WorkflowError::Upload)?
                .unwrap_or_else(|| original.image_url.clone()),
            None => original.image_url.clone(),
        };

        let data = draft.compose(image_url);
        let updated = catalog
            .update(&original.id, &data)
            .await
            .map_err(WorkflowError::Api)?;
        tracing::info!(id = %updated.id, "artwork updated");

        *editor = Editor::Hidden;

        let artworks = catalog.list().await.map_err(WorkflowError::Api)?;
        self.listing.replace(artworks);
        Ok(updated)
    }

    /// Deletion workflow entry point: one click per state transition
    ///
    /// The first click arms a confirmation for [`crate::CONFIRM_WINDOW`];
    /// the confirming click inside the window executes the deletion. The
    /// record is removed from the listing in place; no reload happens.
    pub async fn click_delete(&mut self, id: &str) -> WorkflowResult<DeleteOutcome> {
        if self.in_flight {
            return Err(WorkflowError::Busy);
        }

        let confirm = self.confirms.entry(id.to_string()).or_default();
        match confirm.click() {
            ClickOutcome::Pending => Ok(DeleteOutcome::ConfirmationPending),
            ClickOutcome::Confirmed => {
                self.in_flight = true;
                let result = self.delete_inner(id).await;
                self.in_flight = false;
                result.map(|_| DeleteOutcome::Deleted)
            }
        }
    }

    async fn delete_inner(&mut self, id: &str) -> WorkflowResult<()> {
        let catalog = self.catalog.as_ref().ok_or(WorkflowError::NotConfigured)?;
        let image_url = self
            .listing
            .get(id)
            .map(|a| a.image_url.clone())
            .ok_or_else(|| WorkflowError::UnknownRecord(id.to_string()))?;

        // Best-effort image delete; the record delete proceeds regardless.
        match object_path_from_url(&image_url) {
            Ok(path) => {
                if let Err(e) = self.storage.delete(&path).await {
                    tracing::warn!(id = %id, error = %e, "failed to delete image from storage");
                } else {
                    tracing::debug!(id = %id, path = %path, "image deleted from storage");
                }
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "could not derive object path from locator");
            }
        }

        catalog.delete(id).await.map_err(WorkflowError::Api)?;
        tracing::info!(id = %id, "artwork deleted");

        self.listing.remove(id);
        self.confirms.remove(id);
        Ok(())
    }
}
