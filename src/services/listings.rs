use crate::models::Listing;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the listings file
#[derive(Debug, Error)]
pub enum ListingsError {
    #[error("Failed to read listings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse listings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory listing store
///
/// Loaded once from the static listings file at startup and immutable
/// afterwards. Listing ids are positions in the file.
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    /// Load the store from a JSON file (array of Listing records)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ListingsError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Build the store from raw JSON
    pub fn from_json(raw: &str) -> Result<Self, ListingsError> {
        let mut listings: Vec<Listing> = serde_json::from_str(raw)?;

        for (id, listing) in listings.iter_mut().enumerate() {
            listing.id = id;
        }

        Ok(Self { listings })
    }

    /// All listings, in file order
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    /// Look up one listing by id
    pub fn get(&self, id: usize) -> Option<&Listing> {
        self.listings.get(id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
