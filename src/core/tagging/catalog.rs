use serde::{Deserialize, Serialize};

use super::types::ProbeCategory;
use crate::error::TaggingError;

/// One fixed preference question shown as a swipe card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceProbe {
    pub index: usize,
    pub category: ProbeCategory,
    pub title: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub left_choice: String,
    #[serde(default)]
    pub right_choice: String,
}

impl PreferenceProbe {
    pub fn new(index: usize, category: ProbeCategory, title: impl Into<String>) -> Self {
        Self {
            index,
            category,
            title: title.into(),
            emoji: String::new(),
            left_choice: String::new(),
            right_choice: String::new(),
        }
    }

    fn card(
        index: usize,
        category: ProbeCategory,
        title: &str,
        emoji: &str,
        left_choice: &str,
        right_choice: &str,
    ) -> Self {
        Self {
            index,
            category,
            title: title.to_string(),
            emoji: emoji.to_string(),
            left_choice: left_choice.to_string(),
            right_choice: right_choice.to_string(),
        }
    }
}

/// Immutable, index-ordered probe list. Indices are always `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProbeCatalog {
    probes: Vec<PreferenceProbe>,
}

impl ProbeCatalog {
    pub fn new(probes: Vec<PreferenceProbe>) -> Result<Self, TaggingError> {
        if probes.is_empty() {
            return Err(TaggingError::InvalidCatalog("catalog has no probes".into()));
        }
        for (position, probe) in probes.iter().enumerate() {
            if probe.index != position {
                return Err(TaggingError::InvalidCatalog(format!(
                    "probe '{}' has index {} at position {position}",
                    probe.title, probe.index
                )));
            }
        }
        Ok(Self { probes })
    }

    /// The ten cards of the onboarding flow.
    pub fn default_catalog() -> Self {
        use ProbeCategory as C;

        #[rustfmt::skip]
        let probes = vec![
            PreferenceProbe::card(0, C::SpicePreference, "Spicy vs Mild", "🌶️", "Love the heat!", "Keep it mild"),
            PreferenceProbe::card(1, C::DiningStyle, "Street Food vs Fine Dining", "🍜", "Street food vibes", "Fine dining experience"),
            PreferenceProbe::card(2, C::FlavorPreference, "Sweet vs Savory", "🍰", "Sweet treats", "Savory delights"),
            PreferenceProbe::card(3, C::AdventureLevel, "Adventure vs Comfort", "🍕", "Try new cuisines", "Stick to favorites"),
            PreferenceProbe::card(4, C::DiningPace, "Quick Bite vs Long Meal", "⏰", "Quick and easy", "Take my time"),
            PreferenceProbe::card(5, C::CuisineAsian, "Asian Cuisine", "🍱", "Love it!", "Not my favorite"),
            PreferenceProbe::card(6, C::CuisineMexican, "Mexican Food", "🌮", "Absolutely!", "Rarely"),
            PreferenceProbe::card(7, C::CuisineItalian, "Italian Classics", "🍝", "Always!", "Sometimes"),
            PreferenceProbe::card(8, C::HealthPreference, "Healthy vs Indulgent", "🥗", "Health first", "Treat myself"),
            PreferenceProbe::card(9, C::SocialPreference, "Solo vs Social Dining", "👥", "Love dining alone", "Better with friends"),
        ];

        Self { probes }
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PreferenceProbe> {
        self.probes.get(index)
    }

    pub fn probes(&self) -> &[PreferenceProbe] {
        &self.probes
    }

    pub fn iter(&self) -> impl Iterator<Item = &PreferenceProbe> {
        self.probes.iter()
    }
}

impl Default for ProbeCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

impl<'de> Deserialize<'de> for ProbeCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let probes = Vec::<PreferenceProbe>::deserialize(deserializer)?;
        Self::new(probes).map_err(serde::de::Error::custom)
    }
}
