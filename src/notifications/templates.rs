use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    Match,
    Reservation,
    Reminder,
    Promotion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

pub fn match_found(companion_name: &str) -> Notification {
    Notification::new(
        NotificationKind::Match,
        "🎉 New Match!",
        format!("You've been matched with {companion_name} for dining!"),
    )
}

pub fn reservation_confirmed(restaurant: &str, date: &str, time: &str) -> Notification {
    Notification::new(
        NotificationKind::Reservation,
        "✅ Reservation Confirmed",
        format!("Your table at {restaurant} is confirmed for {date} at {time}"),
    )
}

pub fn reservation_reminder(restaurant: &str, time: &str) -> Notification {
    Notification::new(
        NotificationKind::Reminder,
        "⏰ Reservation Reminder",
        format!("Don't forget your reservation at {restaurant} at {time}!"),
    )
}

pub fn promotion(title: &str, message: &str) -> Notification {
    Notification::new(NotificationKind::Promotion, title, message)
}
