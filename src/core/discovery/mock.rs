use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::RestaurantSearch;
use super::types::{GeoPoint, Restaurant};
use crate::core::BoxFuture;
use crate::error::{Result, TablemateError};

/// Stand-in search: a fixed list, reordered by keyword, then shuffled.
pub struct MockRestaurantSearch {
    base: Vec<Restaurant>,
    max_results: usize,
    rng: Mutex<StdRng>,
}

impl MockRestaurantSearch {
    pub fn new(max_results: usize) -> Self {
        Self::with_rng(max_results, StdRng::from_rng(&mut rand::rng()))
    }

    /// Deterministic shuffling for tests and reproducible demos.
    pub fn with_seed(max_results: usize, seed: u64) -> Self {
        Self::with_rng(max_results, StdRng::seed_from_u64(seed))
    }

    fn with_rng(max_results: usize, rng: StdRng) -> Self {
        Self {
            base: base_restaurants(),
            max_results,
            rng: Mutex::new(rng),
        }
    }

    pub fn base(&self) -> &[Restaurant] {
        &self.base
    }

    /// Keyword-driven ordering before the shuffle.
    pub(crate) fn candidates(&self, query: &str) -> Vec<Restaurant> {
        let query = query.to_lowercase();
        let has = |word: &str| query.contains(word);

        if has("thai") {
            let mut results = thai_restaurants();
            results.extend(self.base.iter().take(3).cloned());
            results
        } else if has("pizza") || has("italian") {
            self.cuisine_first(|r| r.is_cuisine("Italian"), 7)
        } else if has("sushi") || has("japanese") {
            self.cuisine_first(|r| r.is_cuisine("Japanese"), 7)
        } else if has("healthy") || has("salad") {
            self.cuisine_first(|r| r.is_cuisine("Healthy"), 7)
        } else if has("spicy") || has("hot") {
            self.cuisine_first(
                |r| r.is_cuisine("Thai") || r.is_cuisine("Indian") || r.is_cuisine("Mexican"),
                5,
            )
        } else {
            self.base.clone()
        }
    }

    fn cuisine_first(&self, matches: impl Fn(&Restaurant) -> bool, others: usize) -> Vec<Restaurant> {
        let (mut front, rest): (Vec<_>, Vec<_>) =
            self.base.iter().cloned().partition(|r| matches(r));
        front.extend(rest.into_iter().take(others));
        front
    }
}

impl RestaurantSearch for MockRestaurantSearch {
    fn search<'a>(
        &'a self,
        query: &'a str,
        location: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Vec<Restaurant>>> {
        Box::pin(async move {
            tracing::debug!(query, location = ?location, "discovery.mock_search");
            let mut results = self.candidates(query);
            {
                let mut rng = self
                    .rng
                    .lock()
                    .map_err(|e| TablemateError::Other(anyhow::anyhow!("search rng poisoned: {e}")))?;
                results.shuffle(&mut *rng);
            }
            results.truncate(self.max_results);
            Ok(results)
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: &str,
    name: &str,
    cuisine: &str,
    rating: f64,
    price_range: &str,
    address: &str,
    phone: &str,
    description: &str,
    image: &str,
    (latitude, longitude): (f64, f64),
) -> Restaurant {
    Restaurant {
        id: id.into(),
        name: name.into(),
        cuisine: cuisine.into(),
        rating,
        price_range: price_range.into(),
        address: address.into(),
        phone: Some(phone.into()),
        description: description.into(),
        image: image.into(),
        location: GeoPoint {
            latitude,
            longitude,
        },
    }
}

#[rustfmt::skip]
fn base_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant("web-1", "The Golden Spoon", "American", 4.5, "$$", "123 Main St, Downtown", "(555) 123-4567",
            "Farm-to-table American cuisine with seasonal ingredients", "🍽️", (37.7749, -122.4194)),
        restaurant("web-2", "Sakura Blossom", "Japanese", 4.8, "$$$", "456 Cherry St, Japantown", "(555) 987-6543",
            "Authentic Japanese cuisine with fresh sushi and traditional dishes", "🍣", (37.7849, -122.4294)),
        restaurant("web-3", "Mama Mia Pizzeria", "Italian", 4.3, "$$", "789 Little Italy Ave", "(555) 456-7890",
            "Wood-fired pizza and homemade pasta in a cozy atmosphere", "🍕", (37.7649, -122.4094)),
        restaurant("web-4", "Spice Route", "Indian", 4.6, "$$", "321 Curry Lane, Spice District", "(555) 234-5678",
            "Authentic Indian flavors with traditional spices and modern presentation", "🍛", (37.7549, -122.4394)),
        restaurant("web-5", "Le Petit Café", "French", 4.7, "$$$", "567 Bistro Blvd, French Quarter", "(555) 345-6789",
            "Classic French bistro with wine pairings and seasonal menu", "🥐", (37.7879, -122.4074)),
        restaurant("web-6", "Dragon Palace", "Chinese", 4.4, "$$", "890 Dynasty Dr, Chinatown", "(555) 567-8901",
            "Traditional Chinese cuisine with dim sum and Peking duck specialties", "🥟", (37.7949, -122.4074)),
        restaurant("web-7", "Taco Libre", "Mexican", 4.2, "$", "234 Fiesta St, Mission District", "(555) 678-9012",
            "Authentic Mexican street food with fresh ingredients and bold flavors", "🌮", (37.7649, -122.4194)),
        restaurant("web-8", "Mediterranean Breeze", "Mediterranean", 4.5, "$$", "345 Olive Grove Ave", "(555) 789-0123",
            "Fresh Mediterranean dishes with olive oil, herbs, and grilled specialties", "🫒", (37.7749, -122.4294)),
        restaurant("web-9", "Seoul Kitchen", "Korean", 4.6, "$$", "678 K-Town Blvd, Koreatown", "(555) 890-1234",
            "Korean BBQ and traditional dishes with kimchi and banchan", "🍜", (37.7649, -122.4694)),
        restaurant("web-10", "Green Garden", "Healthy", 4.4, "$$", "901 Wellness Way, Health District", "(555) 901-2345",
            "Organic, plant-based cuisine with superfoods and fresh juices", "🥗", (37.7849, -122.4194)),
    ]
}

#[rustfmt::skip]
fn thai_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant("web-thai-1", "Bangkok Street", "Thai", 4.7, "$$", "123 Thai Town, Spice District", "(555) 111-2222",
            "Authentic Thai street food with pad thai, green curry, and mango sticky rice", "🌶️", (37.7749, -122.4194)),
        restaurant("web-thai-2", "Royal Thai Palace", "Thai", 4.8, "$$$", "456 Royal Ave, Thai Quarter", "(555) 222-3333",
            "Upscale Thai dining with royal recipes and elegant presentation", "🍛", (37.7849, -122.4294)),
    ]
}
