use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Hours a match stays valid after it is created.
    #[serde(default = "default_match_ttl_hours")]
    pub match_ttl_hours: u32,
}

fn default_match_ttl_hours() -> u32 {
    24
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            match_ttl_hours: default_match_ttl_hours(),
        }
    }
}
