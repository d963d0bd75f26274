use std::sync::Mutex;

use chrono::{Duration, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use super::CompanionMatcher;
use super::types::{Companion, CounterSign, Match, MatchStatus};
use crate::core::BoxFuture;
use crate::error::{MatchingError, Result, TablemateError};

/// Matches with whoever is asked, assigning a random counter-sign.
pub struct RandomMatcher {
    companions: Vec<Companion>,
    counter_signs: Vec<CounterSign>,
    ttl: Duration,
    rng: Mutex<StdRng>,
}

impl RandomMatcher {
    pub fn new(ttl_hours: u32) -> Self {
        Self::with_rng(ttl_hours, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_seed(ttl_hours: u32, seed: u64) -> Self {
        Self::with_rng(ttl_hours, StdRng::seed_from_u64(seed))
    }

    fn with_rng(ttl_hours: u32, rng: StdRng) -> Self {
        Self {
            companions: default_companions(),
            counter_signs: default_counter_signs(),
            ttl: Duration::hours(i64::from(ttl_hours)),
            rng: Mutex::new(rng),
        }
    }

    /// Replaces the counter-sign list. An empty list makes every match fail.
    pub fn with_counter_signs(mut self, counter_signs: Vec<CounterSign>) -> Self {
        self.counter_signs = counter_signs;
        self
    }

    pub fn counter_signs(&self) -> &[CounterSign] {
        &self.counter_signs
    }

    fn pick_counter_sign(&self) -> Result<CounterSign> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| TablemateError::Other(anyhow::anyhow!("matcher rng poisoned: {e}")))?;
        self.counter_signs
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| MatchingError::NoCounterSigns.into())
    }
}

impl CompanionMatcher for RandomMatcher {
    fn candidates<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Companion>>> {
        Box::pin(async move {
            Ok(self
                .companions
                .iter()
                .filter(|c| c.is_online)
                .cloned()
                .collect())
        })
    }

    fn request_match<'a>(
        &'a self,
        user_id: &'a str,
        companion_id: &'a str,
    ) -> BoxFuture<'a, Result<Match>> {
        Box::pin(async move {
            let companion = self
                .companions
                .iter()
                .find(|c| c.id == companion_id && c.is_online)
                .ok_or_else(|| MatchingError::Unavailable(companion_id.to_string()))?;

            let counter_sign = self.pick_counter_sign()?;
            let created_at = Utc::now();
            Ok(Match {
                id: uuid::Uuid::new_v4().to_string(),
                user1_id: user_id.to_string(),
                user2_id: companion.id.clone(),
                status: MatchStatus::Accepted,
                counter_sign,
                compatibility_score: companion.compatibility_score,
                common_interests: companion.common_interests.clone(),
                created_at,
                expires_at: created_at + self.ttl,
            })
        })
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[allow(clippy::too_many_arguments)]
fn companion(
    id: &str,
    name: &str,
    age: u32,
    avatar: &str,
    food_tags: &[&str],
    compatibility_score: f64,
    common_interests: &[&str],
    preferred_cuisines: &[&str],
    is_online: bool,
) -> Companion {
    Companion {
        id: id.into(),
        name: name.into(),
        age,
        avatar: avatar.into(),
        food_tags: strings(food_tags),
        compatibility_score,
        common_interests: strings(common_interests),
        preferred_cuisines: strings(preferred_cuisines),
        is_online,
    }
}

#[rustfmt::skip]
fn default_companions() -> Vec<Companion> {
    vec![
        companion("1", "Alex", 28, "👨‍🍳", &["Spice Warrior", "Street Food Lover", "Adventure Seeker"], 0.89,
            &["Thai Food", "Spicy Dishes", "Food Photography"], &["Thai", "Mexican", "Indian"], true),
        companion("2", "Sarah", 25, "👩‍🌾", &["Health Conscious", "Organic Lover", "Sweet Tooth"], 0.76,
            &["Healthy Eating", "Desserts", "Coffee"], &["Mediterranean", "Healthy", "French"], true),
        companion("3", "Mike", 32, "👨‍💼", &["Fine Dining", "Wine Enthusiast", "Classic Tastes"], 0.82,
            &["Wine Pairing", "Fine Dining", "Italian Cuisine"], &["Italian", "French", "American"], false),
        companion("4", "Emma", 29, "👩‍🎨", &["Creative Eater", "Instagram Foodie", "Fusion Lover"], 0.71,
            &["Food Photography", "Fusion Cuisine", "Brunch"], &["Fusion", "Japanese", "Korean"], true),
    ]
}

fn counter_sign(user1: &str, user2: &str, category: &str, source: &str, instructions: &str) -> CounterSign {
    CounterSign {
        user1_sign: user1.into(),
        user2_sign: user2.into(),
        category: category.into(),
        source: source.into(),
        instructions: instructions.into(),
    }
}

#[rustfmt::skip]
fn default_counter_signs() -> Vec<CounterSign> {
    vec![
        counter_sign("May the Force be with you", "And also with you", "film", "Star Wars",
            "Use this greeting when you meet at the restaurant"),
        counter_sign("Is this the real life?", "Is this just fantasy?", "lyrics", "Queen - Bohemian Rhapsody",
            "Start with this line to identify each other"),
        counter_sign("It was the best of times", "It was the worst of times", "literature",
            "Charles Dickens - A Tale of Two Cities", "Use this classic opening line as your counter sign"),
        counter_sign("That's what she said", "Bears, beets, Battlestar Galactica", "tv", "The Office",
            "Reference these iconic lines to find each other"),
    ]
}
