use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Companion: a diner who can be matched with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Companion {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub avatar: String,
    pub food_tags: Vec<String>,
    pub compatibility_score: f64,
    pub common_interests: Vec<String>,
    pub preferred_cuisines: Vec<String>,
    pub is_online: bool,
}

// CounterSign: phrase pair two matched diners use to find each other
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSign {
    pub user1_sign: String,
    pub user2_sign: String,
    pub category: String,
    pub source: String,
    pub instructions: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchStatus {
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub user1_id: String,
    pub user2_id: String,
    pub status: MatchStatus,
    pub counter_sign: CounterSign,
    pub compatibility_score: f64,
    pub common_interests: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Match {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Whole-number percentage shown next to a candidate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compatibility_percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}
