use super::traits::{Observer, ObserverEvent, ObserverMetric};
use tracing::{info, warn};

/// Writes events and metrics through `tracing`
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Observer for LogObserver {
    fn record_event(&self, event: &ObserverEvent) {
        match event {
            ObserverEvent::TaggingCompleted { user_id, tags } => {
                info!(user_id = %user_id, tags = ?tags, "tagging.completed");
            }
            ObserverEvent::RestaurantSearch { query, results } => {
                info!(query = %query, results = results, "discovery.search");
            }
            ObserverEvent::MatchAssigned {
                user_id,
                companion_id,
                counter_sign_category,
            } => {
                info!(
                    user_id = %user_id,
                    companion_id = %companion_id,
                    counter_sign = %counter_sign_category,
                    "matching.assigned"
                );
            }
            ObserverEvent::ReservationBooked {
                restaurant,
                confirmation_code,
            } => {
                info!(restaurant = %restaurant, code = %confirmation_code, "reservation.booked");
            }
            ObserverEvent::ReservationCancelled { reservation_id } => {
                info!(reservation_id = %reservation_id, "reservation.cancelled");
            }
            ObserverEvent::Error { component, message } => {
                warn!(component = %component, error = %message, "error");
            }
        }
    }

    fn record_metric(&self, metric: &ObserverMetric) {
        match metric {
            ObserverMetric::DerivationLatency(d) => {
                let us = u64::try_from(d.as_micros()).unwrap_or(u64::MAX);
                info!(latency_us = us, "metric.derivation_latency");
            }
            ObserverMetric::PreferencesSaved(n) => {
                info!(rows = n, "metric.preferences_saved");
            }
        }
    }

    fn name(&self) -> &str {
        "log"
    }
}
