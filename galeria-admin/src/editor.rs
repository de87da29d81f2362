//! Edit modal state machine
//!
//! Two states keyed by a single selected record. Opening pre-populates the
//! draft from the record; cancel discards it; a successful submit (driven by
//! [`crate::AdminSession::submit_edit`]) closes the editor.

use crate::draft::ArtworkDraft;
use shared::models::Artwork;

/// Editor state
#[derive(Debug, Default)]
pub enum Editor {
    /// No record selected for editing
    #[default]
    Hidden,
    /// Editing `original`; `draft` holds the entered values
    Open {
        original: Artwork,
        draft: ArtworkDraft,
    },
}

impl Editor {
    /// Open the editor on a record, pre-populating the draft
    pub fn open(artwork: &Artwork) -> Self {
        Editor::Open {
            original: artwork.clone(),
            draft: ArtworkDraft::from_artwork(artwork),
        }
    }

    /// Close without persisting anything
    pub fn cancel(&mut self) {
        *self = Editor::Hidden;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Editor::Open { .. })
    }

    /// The record being edited, if any
    pub fn original(&self) -> Option<&Artwork> {
        match self {
            Editor::Open { original, .. } => Some(original),
            Editor::Hidden => None,
        }
    }

    /// Mutable access to the entered values, if open
    pub fn draft_mut(&mut self) -> Option<&mut ArtworkDraft> {
        match self {
            Editor::Open { draft, .. } => Some(draft),
            Editor::Hidden => None,
        }
    }
}
