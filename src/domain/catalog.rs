// src/domain/catalog.rs

use crate::domain::listing::Listing;

/// The fixed set of listings searched by every query.
///
/// Built once in `main` and shared by reference with every request.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_listings())
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            title: "Cozy Downtown Apartment".into(),
            location: "New York, NY".into(),
            price: 120,
            rating: 4.8,
            reviews: 234,
            bedrooms: 2,
            bathrooms: 1,
            guests: 4,
            amenities: strings(&["WiFi", "Kitchen", "Air Conditioning", "Washer"]),
            image: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=400".into(),
            description: "Beautiful apartment in the heart of downtown with modern amenities.".into(),
        },
        Listing {
            id: 2,
            title: "Beachfront Villa".into(),
            location: "Miami, FL".into(),
            price: 250,
            rating: 4.9,
            reviews: 156,
            bedrooms: 3,
            bathrooms: 2,
            guests: 6,
            amenities: strings(&["WiFi", "Pool", "Beach Access", "Parking", "Kitchen"]),
            image: "https://images.unsplash.com/photo-1571896349842-33c89424de2d?w=400".into(),
            description: "Stunning beachfront villa with private pool and direct beach access.".into(),
        },
        Listing {
            id: 3,
            title: "Mountain Cabin Retreat".into(),
            location: "Aspen, CO".into(),
            price: 180,
            rating: 4.7,
            reviews: 89,
            bedrooms: 2,
            bathrooms: 1,
            guests: 4,
            amenities: strings(&["WiFi", "Fireplace", "Mountain View", "Hot Tub", "Kitchen"]),
            image: "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?w=400".into(),
            description: "Peaceful mountain cabin with breathtaking views and modern comforts.".into(),
        },
        Listing {
            id: 4,
            title: "Modern Loft in Soho".into(),
            location: "New York, NY".into(),
            price: 200,
            rating: 4.6,
            reviews: 312,
            bedrooms: 1,
            bathrooms: 1,
            guests: 2,
            amenities: strings(&["WiFi", "Kitchen", "Gym Access", "Rooftop", "Washer"]),
            image: "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=400".into(),
            description: "Stylish loft in trendy Soho neighborhood with rooftop access.".into(),
        },
        Listing {
            id: 5,
            title: "Luxury Penthouse Suite".into(),
            location: "Los Angeles, CA".into(),
            price: 350,
            rating: 4.9,
            reviews: 201,
            bedrooms: 3,
            bathrooms: 2,
            guests: 6,
            amenities: strings(&["WiFi", "Pool", "Gym", "Concierge", "Parking", "Kitchen"]),
            image: "https://images.unsplash.com/photo-1512918728675-ed5a9ecdebfd?w=400".into(),
            description: "Ultra-luxury penthouse with panoramic city views and premium amenities.".into(),
        },
        Listing {
            id: 6,
            title: "Charming Studio Apartment".into(),
            location: "San Francisco, CA".into(),
            price: 95,
            rating: 4.5,
            reviews: 178,
            bedrooms: 0,
            bathrooms: 1,
            guests: 2,
            amenities: strings(&["WiFi", "Kitchen", "Washer"]),
            image: "https://images.unsplash.com/photo-1522771739844-6a9f6d5f14af?w=400".into(),
            description: "Cozy studio perfect for couples, located in vibrant neighborhood.".into(),
        },
        Listing {
            id: 7,
            title: "Family-Friendly House".into(),
            location: "Orlando, FL".into(),
            price: 150,
            rating: 4.8,
            reviews: 267,
            bedrooms: 4,
            bathrooms: 2,
            guests: 8,
            amenities: strings(&["WiFi", "Pool", "Kitchen", "Parking", "Washer", "TV"]),
            image: "https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=400".into(),
            description: "Spacious family home near theme parks with private pool.".into(),
        },
        Listing {
            id: 8,
            title: "Historic Brownstone".into(),
            location: "Boston, MA".into(),
            price: 175,
            rating: 4.7,
            reviews: 145,
            bedrooms: 2,
            bathrooms: 1,
            guests: 4,
            amenities: strings(&["WiFi", "Kitchen", "Fireplace", "Washer"]),
            image: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=400".into(),
            description: "Beautifully restored historic brownstone with original character.".into(),
        },
    ]
}
