// src/domain/interpret.rs

use crate::domain::criteria::SearchCriteria;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Known cities as (lower-cased needle, display name). List order breaks ties.
pub const KNOWN_LOCATIONS: &[(&str, &str)] = &[
    ("new york", "New York"),
    ("miami", "Miami"),
    ("aspen", "Aspen"),
    ("los angeles", "Los Angeles"),
    ("san francisco", "San Francisco"),
    ("orlando", "Orlando"),
    ("boston", "Boston"),
];

/// Query keyword -> canonical amenity name.
pub const AMENITY_KEYWORDS: &[(&str, &str)] = &[
    ("pool", "Pool"),
    ("wifi", "WiFi"),
    ("kitchen", "Kitchen"),
    ("parking", "Parking"),
    ("beach", "Beach Access"),
    ("fireplace", "Fireplace"),
    ("gym", "Gym"),
    ("hot tub", "Hot Tub"),
    ("washer", "Washer"),
];

pub const DESCRIPTIVE_KEYWORDS: &[&str] = &[
    "cozy",
    "luxury",
    "beachfront",
    "downtown",
    "mountain",
    "family",
    "studio",
    "penthouse",
];

/// Which bound(s) a price pattern sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriceRule {
    Max,
    Min,
    Range,
}

lazy_static! {
    // Evaluated top to bottom; the first pattern that matches wins.
    static ref PRICE_PATTERNS: Vec<(Regex, PriceRule)> = vec![
        // `[0-9]`, not `\d`: `\d` is Unicode-aware and `u32::from_str` is not.
        (Regex::new(r"under\s*\$?([0-9]+)").unwrap(), PriceRule::Max),
        (Regex::new(r"less than\s*\$?([0-9]+)").unwrap(), PriceRule::Max),
        (Regex::new(r"below\s*\$?([0-9]+)").unwrap(), PriceRule::Max),
        (Regex::new(r"over\s*\$?([0-9]+)").unwrap(), PriceRule::Min),
        (Regex::new(r"more than\s*\$?([0-9]+)").unwrap(), PriceRule::Min),
        (Regex::new(r"above\s*\$?([0-9]+)").unwrap(), PriceRule::Min),
        (Regex::new(r"\$?([0-9]+)\s*-\s*\$?([0-9]+)").unwrap(), PriceRule::Range),
    ];
    static ref BEDROOM_RE: Regex = Regex::new(r"([0-9]+)\s*bedroom").unwrap();
    static ref GUEST_RE: Regex = Regex::new(r"([0-9]+)\s*(?:guest|people|person)").unwrap();
}

/// Amenity keyword occurrences to skip, as (keyword, following text).
/// "beachfront" describes the place, it does not ask for beach access.
const AMENITY_EXCLUSIONS: &[(&str, &str)] = &[("beach", "front")];

/// Turn a free-text query into search criteria.
///
/// Pure function of `query`; unmatched fields stay unconstrained.
pub fn interpret(query: &str) -> SearchCriteria {
    let text = query.to_lowercase();

    let mut criteria = SearchCriteria {
        location: extract_location(&text),
        min_bedrooms: first_count(&BEDROOM_RE, &text),
        min_guests: first_count(&GUEST_RE, &text),
        amenities: extract_amenities(&text),
        keywords: extract_keywords(&text),
        ..SearchCriteria::default()
    };

    if let Some((min, max)) = extract_price(&text) {
        criteria.min_price = min;
        criteria.max_price = max;
    }

    criteria
}

fn extract_location(text: &str) -> Option<String> {
    KNOWN_LOCATIONS
        .iter()
        .find(|(needle, _)| text.contains(needle))
        .map(|(_, display)| display.to_string())
}

/// Returns (min, max) from the first matching price pattern.
fn extract_price(text: &str) -> Option<(Option<u32>, Option<u32>)> {
    PRICE_PATTERNS.iter().find_map(|(re, rule)| {
        let caps = re.captures(text)?;
        let bounds = match rule {
            PriceRule::Max => (None, Some(capture_number(&caps, 1))),
            PriceRule::Min => (Some(capture_number(&caps, 1)), None),
            PriceRule::Range => (
                Some(capture_number(&caps, 1)),
                Some(capture_number(&caps, 2)),
            ),
        };
        Some(bounds)
    })
}

fn first_count(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text).map(|caps| capture_number(&caps, 1))
}

fn extract_amenities(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for (keyword, amenity) in AMENITY_KEYWORDS {
        if mentions_amenity(text, keyword) && !out.iter().any(|a| a == amenity) {
            out.push(amenity.to_string());
        }
    }
    out
}

/// Substring containment, minus the excluded continuations.
fn mentions_amenity(text: &str, keyword: &str) -> bool {
    text.match_indices(keyword).any(|(idx, _)| {
        let rest = &text[idx + keyword.len()..];
        !AMENITY_EXCLUSIONS
            .iter()
            .any(|(kw, follow)| *kw == keyword && rest.starts_with(follow))
    })
}

fn extract_keywords(text: &str) -> Vec<String> {
    DESCRIPTIVE_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

/// Captures are ASCII digits only, so the one parse failure is overflow: saturate.
fn capture_number(caps: &Captures, group: usize) -> u32 {
    caps.get(group)
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .unwrap_or(u32::MAX)
}
