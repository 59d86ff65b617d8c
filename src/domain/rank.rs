// src/domain/rank.rs

use crate::domain::criteria::SearchCriteria;
use crate::domain::listing::{Listing, ScoredListing};

pub const MAX_RESULTS: usize = 10;

pub const LOCATION_BONUS: f64 = 10.0;
pub const BEDROOM_BONUS: f64 = 5.0;
pub const GUEST_BONUS: f64 = 5.0;
pub const AMENITY_POINTS: f64 = 2.0;
pub const KEYWORD_POINTS: f64 = 3.0;
pub const RATING_WEIGHT: f64 = 2.0;

/// Score every eligible listing and return the best `MAX_RESULTS`, highest first.
///
/// Equal scores keep catalog order. Neither input is modified.
pub fn rank(catalog: &[Listing], criteria: &SearchCriteria) -> Vec<ScoredListing> {
    let mut scored: Vec<ScoredListing> = catalog
        .iter()
        .filter(|listing| is_eligible(listing, criteria))
        .map(|listing| ScoredListing {
            listing: listing.clone(),
            match_score: score(listing, criteria),
        })
        .filter(|s| s.match_score > 0.0)
        .collect();

    // sort_by is stable, so ties stay in catalog order
    scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    scored.truncate(MAX_RESULTS);
    scored
}

/// Hard constraints. A listing failing any of these is never scored.
///
/// Checked in order: location, max price, min price, bedrooms, guests.
pub fn is_eligible(listing: &Listing, criteria: &SearchCriteria) -> bool {
    if let Some(location) = &criteria.location {
        if !listing
            .location
            .to_lowercase()
            .contains(&location.to_lowercase())
        {
            return false;
        }
    }
    if criteria.max_price.is_some_and(|max| listing.price > max) {
        return false;
    }
    if criteria.min_price.is_some_and(|min| listing.price < min) {
        return false;
    }
    if criteria
        .min_bedrooms
        .is_some_and(|min| listing.bedrooms < min)
    {
        return false;
    }
    if criteria.min_guests.is_some_and(|min| listing.guests < min) {
        return false;
    }
    true
}

/// Additive score for a listing that already passed `is_eligible`.
pub fn score(listing: &Listing, criteria: &SearchCriteria) -> f64 {
    let mut total = 0.0;

    if criteria.location.is_some() {
        total += LOCATION_BONUS;
    }
    if criteria.min_bedrooms.is_some() {
        total += BEDROOM_BONUS;
    }
    if criteria.min_guests.is_some() {
        total += GUEST_BONUS;
    }

    let amenity_hits = criteria
        .amenities
        .iter()
        .filter(|a| listing.has_amenity(a))
        .count();
    total += amenity_hits as f64 * AMENITY_POINTS;

    let text = listing.searchable_text();
    let keyword_hits = criteria
        .keywords
        .iter()
        .filter(|k| text.contains(&k.to_lowercase()))
        .count();
    total += keyword_hits as f64 * KEYWORD_POINTS;

    total + listing.rating * RATING_WEIGHT
}
