//! In-memory catalog listing
//!
//! Holds the last fetched catalog in server-return order. Refresh replaces
//! the whole list; deletion removes a single record without a round trip.

use shared::models::Artwork;

/// The fetched catalog, in server-return order
#[derive(Debug, Default)]
pub struct Listing {
    artworks: Vec<Artwork>,
}

impl Listing {
    /// All listed records
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Replace the listing wholesale with a fresh fetch
    pub fn replace(&mut self, artworks: Vec<Artwork>) {
        self.artworks = artworks;
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    /// Remove a record by id, keeping the order of the rest
    pub fn remove(&mut self, id: &str) -> Option<Artwork> {
        let index = self.artworks.iter().position(|a| a.id == id)?;
        Some(self.artworks.remove(index))
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }
}
