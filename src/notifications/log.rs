use std::sync::Mutex;

use super::Notifier;
use super::templates::Notification;
use crate::core::BoxFuture;
use crate::error::{Result, TablemateError};

/// Writes notifications to the log instead of a push service.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    fn send<'a>(&'a self, notification: &'a Notification) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            tracing::info!(
                kind = %notification.kind,
                title = %notification.title,
                message = %notification.message,
                "notification"
            );
            Ok(())
        })
    }
}

/// Keeps every notification sent, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    fn send<'a>(&'a self, notification: &'a Notification) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            self.sent
                .lock()
                .map_err(|e| TablemateError::Other(anyhow::anyhow!("notifier poisoned: {e}")))?
                .push(notification.clone());
            Ok(())
        })
    }
}
