use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationsConfig {
    #[serde(default = "default_code_prefix")]
    pub code_prefix: String,
    #[serde(default = "default_reminder_lead_minutes")]
    pub reminder_lead_minutes: u32,
    #[serde(default = "default_party_size")]
    pub default_party_size: u32,
}

fn default_code_prefix() -> String {
    "HF2024".into()
}
fn default_reminder_lead_minutes() -> u32 {
    60
}
fn default_party_size() -> u32 {
    2
}

impl Default for ReservationsConfig {
    fn default() -> Self {
        Self {
            code_prefix: default_code_prefix(),
            reminder_lead_minutes: default_reminder_lead_minutes(),
            default_party_size: default_party_size(),
        }
    }
}
