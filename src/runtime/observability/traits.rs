use std::time::Duration;

/// Events the observer can record
#[derive(Debug, Clone)]
pub enum ObserverEvent {
    TaggingCompleted {
        user_id: String,
        tags: Vec<String>,
    },
    RestaurantSearch {
        query: String,
        results: usize,
    },
    MatchAssigned {
        user_id: String,
        companion_id: String,
        counter_sign_category: String,
    },
    ReservationBooked {
        restaurant: String,
        confirmation_code: String,
    },
    ReservationCancelled {
        reservation_id: String,
    },
    Error {
        component: String,
        message: String,
    },
}

/// Numeric metrics
#[derive(Debug, Clone)]
pub enum ObserverMetric {
    DerivationLatency(Duration),
    PreferencesSaved(u64),
}

/// Sink for domain events and metrics
pub trait Observer: Send + Sync {
    /// Record a discrete event
    fn record_event(&self, event: &ObserverEvent);

    /// Record a numeric metric
    fn record_metric(&self, metric: &ObserverMetric);

    /// Flush any buffered data (no-op for most backends)
    fn flush(&self) {}

    /// Human-readable name of this observer
    fn name(&self) -> &str;
}
