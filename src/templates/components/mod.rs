use crate::domain::ScoredListing;
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn tag(label: &str) -> Markup {
    html! {
        span class="tag" { (label) }
    }
}

pub fn listing_card(scored: &ScoredListing) -> Markup {
    let l = &scored.listing;
    html! {
        div class="card listing" data-id=(l.id) {
            img src=(l.image) alt=(l.title);
            h3 { (l.title) }
            p class="location" { (l.location) }
            p {
                strong { "$" (l.price) } " / night · "
                (format!("{:.1}", l.rating)) " ★ (" (l.reviews) " reviews)"
            }
            p {
                (l.bedrooms) " bedrooms · " (l.bathrooms) " baths · up to " (l.guests) " guests"
            }
            p { (l.description) }
            div {
                @for amenity in &l.amenities {
                    (tag(amenity))
                }
            }
            p class="score" { "Match score: " (format!("{:.1}", scored.match_score)) }
        }
    }
}
