use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

// Restaurant: one search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    pub price_range: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub location: GeoPoint,
}

impl Restaurant {
    pub fn is_cuisine(&self, cuisine: &str) -> bool {
        self.cuisine.eq_ignore_ascii_case(cuisine)
    }
}

// Mood: drives which cuisines a recommendation starts from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Mood {
    Happy,
    Stressed,
    Adventurous,
    Celebratory,
    Tired,
    Cozy,
}

impl Mood {
    pub fn cuisines(self) -> &'static [&'static str] {
        match self {
            Self::Happy => &["Italian", "Mexican", "Thai"],
            Self::Stressed => &["Comfort Food", "American", "Chinese"],
            Self::Adventurous => &["Fusion", "Korean", "Indian"],
            Self::Celebratory => &["French", "Japanese", "Mediterranean"],
            Self::Tired => &["Healthy", "Vietnamese", "American"],
            Self::Cozy => &["Italian", "American", "French"],
        }
    }
}

/// Cuisines for a free-form mood string; unknown moods fall back to American.
pub fn mood_cuisines(mood: &str) -> &'static [&'static str] {
    match mood.trim().parse::<Mood>() {
        Ok(mood) => mood.cuisines(),
        Err(_) => &["American"],
    }
}
