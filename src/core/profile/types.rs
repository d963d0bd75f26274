use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::tagging::FoodProfileUpdate;

// Location: coordinates plus display city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub city: Option<String>,
}

// UserProfile: the profile row the tag deriver's output lands in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub food_tags: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub preferred_cuisines: Vec<String>,
    #[serde(default)]
    pub location: Option<Location>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            age: None,
            bio: None,
            food_tags: Vec::new(),
            dietary_restrictions: Vec::new(),
            preferred_cuisines: Vec::new(),
            location: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the food fields wholesale and bumps `updated_at`.
    pub fn apply(&mut self, update: &FoodProfileUpdate) {
        self.food_tags.clone_from(&update.food_tags);
        self.preferred_cuisines.clone_from(&update.preferred_cuisines);
        self.dietary_restrictions.clone_from(&update.dietary_restrictions);
        self.updated_at = Utc::now();
    }
}

// StoredPreference: a saved per-card row with its assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPreference {
    pub id: String,
    #[serde(flatten)]
    pub row: crate::core::tagging::FoodPreferenceRow,
    pub created_at: DateTime<Utc>,
}
