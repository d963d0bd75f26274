pub mod log;
pub mod templates;

pub use self::log::{LogNotifier, RecordingNotifier};
pub use templates::{
    Notification, NotificationKind, match_found, promotion, reservation_confirmed,
    reservation_reminder,
};

use crate::core::BoxFuture;
use crate::error::Result;

/// Delivers user-facing notifications.
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    fn send<'a>(&'a self, notification: &'a Notification) -> BoxFuture<'a, Result<()>>;
}
