use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
    #[serde(default = "default_mood")]
    pub default_mood: String,
}

fn default_max_results() -> usize {
    10
}
fn default_recommendation_limit() -> usize {
    8
}
fn default_mood() -> String {
    "happy".into()
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            recommendation_limit: default_recommendation_limit(),
            default_mood: default_mood(),
        }
    }
}
