use serde::{Deserialize, Serialize};

/// Gesture thresholds and tag-rule ratios for the onboarding swipe deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggingConfig {
    /// Share of the screen width a drag must pass to count as an answer.
    #[serde(default = "default_commit_ratio")]
    pub commit_ratio: f64,
    /// Share of the width past which an answer becomes love/hate.
    #[serde(default = "default_intensify_ratio")]
    pub intensify_ratio: f64,
    #[serde(default = "default_adventure_ratio")]
    pub adventure_ratio: f64,
    #[serde(default = "default_classic_ratio")]
    pub classic_ratio: f64,
    #[serde(default = "default_fine_dining_min_loved")]
    pub fine_dining_min_loved: usize,
}

fn default_commit_ratio() -> f64 {
    0.3
}
fn default_intensify_ratio() -> f64 {
    0.7
}
fn default_adventure_ratio() -> f64 {
    0.7
}
fn default_classic_ratio() -> f64 {
    0.3
}
fn default_fine_dining_min_loved() -> usize {
    2
}

impl Default for TaggingConfig {
    fn default() -> Self {
        Self {
            commit_ratio: default_commit_ratio(),
            intensify_ratio: default_intensify_ratio(),
            adventure_ratio: default_adventure_ratio(),
            classic_ratio: default_classic_ratio(),
            fine_dining_min_loved: default_fine_dining_min_loved(),
        }
    }
}
