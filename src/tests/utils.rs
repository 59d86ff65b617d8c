use crate::domain::{Catalog, Listing};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Minimal listing for hand-built catalogs.
pub fn make_listing(id: u32, location: &str, price: u32, rating: f64) -> Listing {
    Listing {
        id,
        title: format!("Listing {id}"),
        location: location.to_string(),
        price,
        rating,
        reviews: 10,
        bedrooms: 1,
        bathrooms: 1,
        guests: 2,
        amenities: vec!["WiFi".to_string()],
        image: String::new(),
        description: "A place to stay.".to_string(),
    }
}

pub fn ids(results: &[crate::domain::ScoredListing]) -> Vec<u32> {
    results.iter().map(|s| s.listing.id).collect()
}

pub fn builtin_catalog() -> Catalog {
    Catalog::builtin()
}

pub fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp)).expect("response body should be JSON")
}
