//! Artwork form draft
//!
//! One draft backs both the creation form and the edit modal; the two are
//! the same component with different entry points.

use crate::upload::ImageFile;
use shared::models::{Artwork, ArtworkData};

/// Studio name the artist field falls back to
pub const DEFAULT_ARTIST: &str = "Shirley Madero";

/// Editable field state for one artwork
#[derive(Debug, Clone)]
pub struct ArtworkDraft {
    pub title: String,
    pub artist: String,
    pub description: String,
    pub styles: Vec<String>,
    pub size: String,
    pub collection: String,
    pub year: Option<i32>,
    pub price: Option<i32>,
    pub available: bool,
    image: Option<ImageFile>,
}

impl Default for ArtworkDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: DEFAULT_ARTIST.to_string(),
            description: String::new(),
            styles: Vec::new(),
            size: String::new(),
            collection: String::new(),
            year: None,
            price: None,
            available: false,
            image: None,
        }
    }
}

impl ArtworkDraft {
    /// Pre-populate a draft from an existing record
    ///
    /// Only truthy source fields overwrite the draft's defaults: empty
    /// strings, `year`/`price` of zero, and `available: false` leave the
    /// default in place. A checkbox shown unchecked for an unavailable
    /// record is therefore the form default, not the record value.
    pub fn from_artwork(artwork: &Artwork) -> Self {
        let mut draft = Self::default();
        if !artwork.title.is_empty() {
            draft.title = artwork.title.clone();
        }
        if !artwork.artist.is_empty() {
            draft.artist = artwork.artist.clone();
        }
        if !artwork.description.is_empty() {
            draft.description = artwork.description.clone();
        }
        if !artwork.styles.is_empty() {
            draft.styles = artwork.styles.clone();
        }
        if !artwork.size.is_empty() {
            draft.size = artwork.size.clone();
        }
        if !artwork.collection.is_empty() {
            draft.collection = artwork.collection.clone();
        }
        if let Some(year) = artwork.year
            && year != 0
        {
            draft.year = Some(year);
        }
        if let Some(price) = artwork.price
            && price != 0
        {
            draft.price = Some(price);
        }
        if artwork.available {
            draft.available = true;
        }
        draft
    }

    /// Replace the style tags from a comma-separated entry
    ///
    /// The split is literal: `"a, b"` yields `["a", " b"]`, surrounding
    /// whitespace included.
    pub fn set_styles_input(&mut self, input: &str) {
        self.styles = input.split(',').map(str::to_string).collect();
    }

    /// Render the style tags back into the comma-separated entry
    pub fn styles_input(&self) -> String {
        self.styles.join(",")
    }

    /// Select an image file for upload on the next submit
    pub fn select_image(&mut self, file: ImageFile) {
        self.image = Some(file);
    }

    /// Drop the selected image
    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// The currently selected image, if any
    pub fn image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    /// Compose the mutation payload from the current field state
    pub fn compose(&self, image_url: String) -> ArtworkData {
        ArtworkData {
            title: self.title.clone(),
            artist: self.artist.clone(),
            description: self.description.clone(),
            styles: self.styles.clone(),
            size: self.size.clone(),
            collection: self.collection.clone(),
            year: self.year,
            price: self.price,
            available: self.available,
            image_url,
        }
    }

    /// Restore every field to its default and drop the selected image
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
