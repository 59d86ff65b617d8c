// src/domain/criteria.rs

use serde::Serialize;

/// Structured constraints derived from one free-text query.
///
/// Every field defaults to "unconstrained": `None` for the scalar bounds,
/// empty for the amenity and keyword sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchCriteria {
    /// Display form of a known city, e.g. "New York".
    pub location: Option<String>,
    pub max_price: Option<u32>,
    pub min_price: Option<u32>,
    #[serde(rename = "bedrooms")]
    pub min_bedrooms: Option<u32>,
    #[serde(rename = "guests")]
    pub min_guests: Option<u32>,
    /// Canonical amenity names, no duplicates.
    pub amenities: Vec<String>,
    /// Descriptive tags such as "cozy" or "beachfront", no duplicates.
    pub keywords: Vec<String>,
}

impl SearchCriteria {
    pub fn is_unconstrained(&self) -> bool {
        self == &SearchCriteria::default()
    }
}
