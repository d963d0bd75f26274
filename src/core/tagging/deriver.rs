use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::{PreferenceProbe, ProbeCatalog};
use super::session::ResponseRecord;
use super::types::{
    FoodProfileUpdate, PersonalityTag, PersonalityTagSet, ProbeCategory, ResponseIntensity,
};
use crate::config::TaggingConfig;
use crate::error::TaggingError;

/// Thresholds for the count-based rules.
///
/// Both ratio checks are strict, so a positive count of exactly
/// `classic_ratio × size` or `adventure_ratio × size` emits neither tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TagRules {
    pub adventure_ratio: f64,
    pub classic_ratio: f64,
    /// `Fine Dining` needs strictly more loved probes than this.
    pub fine_dining_min_loved: usize,
}

impl TagRules {
    pub fn from_config(config: &TaggingConfig) -> Self {
        Self {
            adventure_ratio: config.adventure_ratio,
            classic_ratio: config.classic_ratio,
            fine_dining_min_loved: config.fine_dining_min_loved,
        }
    }
}

impl Default for TagRules {
    fn default() -> Self {
        Self {
            adventure_ratio: 0.7,
            classic_ratio: 0.3,
            fine_dining_min_loved: 2,
        }
    }
}

/// One row per answered probe, as handed to the profile sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPreferenceRow {
    pub user_id: String,
    pub food_item: String,
    pub preference: ResponseIntensity,
    pub tags: Vec<String>,
}

/// Pure rule evaluation over a completed response record.
#[derive(Debug, Clone)]
pub struct TagDeriver {
    catalog: Arc<ProbeCatalog>,
    rules: TagRules,
}

impl TagDeriver {
    pub fn new(catalog: Arc<ProbeCatalog>, rules: TagRules) -> Self {
        Self { catalog, rules }
    }

    pub fn from_config(catalog: Arc<ProbeCatalog>, config: &TaggingConfig) -> Self {
        Self::new(catalog, TagRules::from_config(config))
    }

    pub fn catalog(&self) -> &Arc<ProbeCatalog> {
        &self.catalog
    }

    pub fn rules(&self) -> TagRules {
        self.rules
    }

    /// Starts an empty record sized to this deriver's catalog.
    pub fn new_record(&self) -> ResponseRecord {
        ResponseRecord::new(self.catalog.len())
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn derive_tags(&self, record: &ResponseRecord) -> Result<PersonalityTagSet, TaggingError> {
        let size = self.catalog.len();
        if record.catalog_size() != size {
            return Err(TaggingError::InvalidCatalog(format!(
                "record sized for {} probes, catalog has {size}",
                record.catalog_size()
            )));
        }
        if !record.is_complete() {
            return Err(TaggingError::IncompleteSession {
                answered: record.answered(),
                required: size,
            });
        }

        let mut positive: Vec<&PreferenceProbe> = Vec::new();
        let mut loved = 0usize;
        for probe in self.catalog.iter() {
            let Some(intensity) = record.get(probe.index) else {
                continue;
            };
            if intensity.is_positive() {
                positive.push(probe);
            }
            if intensity == ResponseIntensity::Love {
                loved += 1;
            }
        }

        let any_positive = |category: ProbeCategory| positive.iter().any(|p| p.category == category);

        let mut tags = PersonalityTagSet::new();
        if any_positive(ProbeCategory::SpicePreference) {
            tags.push(PersonalityTag::SpiceWarrior);
        }
        if any_positive(ProbeCategory::FlavorPreference) {
            tags.push(PersonalityTag::SweetTooth);
        }
        if any_positive(ProbeCategory::DiningStyle) {
            tags.push(PersonalityTag::StreetFoodLover);
        }

        let positive_count = positive.len() as f64;
        if positive_count > self.rules.adventure_ratio * size as f64 {
            tags.push(PersonalityTag::AdventureSeeker);
        } else if positive_count < self.rules.classic_ratio * size as f64 {
            tags.push(PersonalityTag::ClassicTastes);
        }

        if any_positive(ProbeCategory::HealthPreference) {
            tags.push(PersonalityTag::HealthConscious);
        }
        if loved > self.rules.fine_dining_min_loved {
            tags.push(PersonalityTag::FineDining);
        }

        if tags.is_empty() {
            tags.push(PersonalityTag::Foodie);
        }

        tracing::debug!(
            positive = positive.len(),
            loved,
            tags = ?tags.labels(),
            "tagging.derive"
        );
        Ok(tags)
    }

    pub fn profile_update(&self, record: &ResponseRecord) -> Result<FoodProfileUpdate, TaggingError> {
        self.derive_tags(record).map(|tags| FoodProfileUpdate::from(&tags))
    }

    /// Per-probe rows in catalog order; unanswered probes are skipped.
    pub fn preference_rows(&self, record: &ResponseRecord, user_id: &str) -> Vec<FoodPreferenceRow> {
        self.catalog
            .iter()
            .filter_map(|probe| {
                record.get(probe.index).map(|preference| FoodPreferenceRow {
                    user_id: user_id.to_string(),
                    food_item: probe.title.clone(),
                    preference,
                    tags: vec![probe.category.to_string()],
                })
            })
            .collect()
    }
}

impl Default for TagDeriver {
    fn default() -> Self {
        Self::new(Arc::new(ProbeCatalog::default_catalog()), TagRules::default())
    }
}
