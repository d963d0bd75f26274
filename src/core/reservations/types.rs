use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// 12-hour clock label, e.g. `7:30 PM`.
    pub time: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}

// BookableRestaurant: a venue that takes reservations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookableRestaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    pub price_range: String,
    pub address: String,
    pub phone: String,
    pub image: String,
    pub slots: Vec<TimeSlot>,
}

impl BookableRestaurant {
    pub fn slot(&self, time: &str) -> Option<&TimeSlot> {
        let time = time.trim();
        self.slots.iter().find(|s| s.time.eq_ignore_ascii_case(time))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub restaurant_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub party_size: u32,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub companion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub party_size: u32,
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companion: Option<String>,
    pub confirmation_code: String,
    /// Absent when the reminder instant had already passed at booking time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.status != ReservationStatus::Cancelled
    }
}

/// Formats `{prefix}-{n:03}`.
pub fn confirmation_code(prefix: &str, n: usize) -> String {
    format!("{prefix}-{n:03}")
}
