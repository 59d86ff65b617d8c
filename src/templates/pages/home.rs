// templates/pages/home.rs

use crate::domain::SearchCriteria;
use crate::router::SearchResponse;
use crate::templates::{card, components::tag, desktop_layout, listing_card};
use maud::{html, Markup};

const EXAMPLE_QUERIES: &[&str] = &[
    "Beachfront villa in Miami with pool under $300",
    "Cozy apartment in New York under $150",
    "Mountain cabin with hot tub for 4 guests",
    "Family house with 3 bedrooms and parking",
];

pub fn home_page(outcome: Option<&SearchResponse>) -> Markup {
    let current = outcome.map(|o| o.query.as_str()).unwrap_or("");

    desktop_layout(
        "Listing Finder",
        html! {
            main class="container" {
                h1 { "Find a place to stay" }
                p { "Describe what you want in plain words: city, budget, bedrooms, guests, amenities." }

                form action="/" method="get" {
                    input
                        type="text"
                        name="q"
                        value=(current)
                        placeholder="e.g. cozy apartment in Boston under $200"
                        style="width: 70%; padding: 8px; font-size: 16px;";
                    button type="submit" style="padding: 8px 16px; font-size: 16px;" { "Search" }
                }

                p {
                    "Try: "
                    @for example in EXAMPLE_QUERIES {
                        a href=(format!("/?q={}", encode(example))) style="margin-right: 1rem;" { (example) }
                    }
                }

                @if let Some(outcome) = outcome {
                    (criteria_card(&outcome.criteria))

                    h2 { "Found " (outcome.count) " listing" @if outcome.count != 1 { "s" } " for \"" (outcome.query) "\"" }

                    @if outcome.results.is_empty() {
                        p { "No listings match. Try loosening the price or location." }
                    } @else {
                        div class="results" {
                            @for scored in &outcome.results {
                                (listing_card(scored))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn criteria_card(criteria: &SearchCriteria) -> Markup {
    card(
        "Understood as",
        html! {
            @if criteria.is_unconstrained() {
                p { "No filters recognised; showing top rated listings." }
            }
            ul {
                @if let Some(location) = &criteria.location {
                    li { "Location: " (location) }
                }
                @if let Some(min) = criteria.min_price {
                    li { "Min price: $" (min) }
                }
                @if let Some(max) = criteria.max_price {
                    li { "Max price: $" (max) }
                }
                @if let Some(beds) = criteria.min_bedrooms {
                    li { "Bedrooms: " (beds) "+" }
                }
                @if let Some(guests) = criteria.min_guests {
                    li { "Guests: " (guests) "+" }
                }
            }
            @for amenity in &criteria.amenities {
                (tag(amenity))
            }
            @for keyword in &criteria.keywords {
                (tag(keyword))
            }
        },
    )
}

fn encode(query: &str) -> String {
    url::form_urlencoded::byte_serialize(query.as_bytes()).collect()
}
