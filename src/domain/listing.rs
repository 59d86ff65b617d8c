// src/domain/listing.rs

use serde::Serialize;

/// A rental listing from the built-in catalog. Read-only after startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub id: u32,
    pub title: String,
    /// City and state as free text, e.g. "Miami, FL".
    pub location: String,
    /// Nightly price in whole dollars.
    pub price: u32,
    /// 0.0 to 5.0
    pub rating: f64,
    pub reviews: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Maximum guest count.
    pub guests: u32,
    /// Canonical amenity names, e.g. "Pool", "Hot Tub".
    pub amenities: Vec<String>,
    pub image: String,
    pub description: String,
}

impl Listing {
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    /// Lower-cased title and description, the text keyword tags are matched against.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

/// A listing paired with its match score. Only lives inside one search response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub match_score: f64,
}
