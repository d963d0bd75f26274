// Restaurant discovery. Only a mock backend exists; ranking is not modelled.

pub mod mock;
pub mod recommend;
pub mod types;

pub use mock::MockRestaurantSearch;
pub use recommend::{recommend, recommendation_query};
pub use types::{GeoPoint, Mood, Restaurant, mood_cuisines};

use crate::core::BoxFuture;
use crate::error::Result;

/// Capability: query text (and optional area) in, restaurants out.
pub trait RestaurantSearch: Send + Sync {
    fn search<'a>(
        &'a self,
        query: &'a str,
        location: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Vec<Restaurant>>>;
}
