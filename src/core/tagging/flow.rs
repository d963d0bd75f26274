use std::time::Instant;

use serde::Serialize;

use super::session::TaggingSession;
use super::types::{FoodProfileUpdate, PersonalityTagSet};
use crate::core::profile::{ProfileSink, UserProfile};
use crate::error::Result;
use crate::runtime::observability::{Observer, ObserverEvent, ObserverMetric};

/// Outcome of a finished onboarding pass.
#[derive(Debug, Clone, Serialize)]
pub struct TaggingOutcome {
    pub tags: PersonalityTagSet,
    pub profile: UserProfile,
    pub preferences_saved: usize,
}

/// Derives tags for a complete session and hands them to the profile sink.
///
/// Derivation happens before any I/O, so an incomplete or already-derived
/// session persists nothing. Sink failures propagate unchanged.
pub async fn complete_tagging(
    session: &mut TaggingSession,
    user_id: &str,
    sink: &dyn ProfileSink,
    observer: &dyn Observer,
) -> Result<TaggingOutcome> {
    let started = Instant::now();
    let tags = session.derive()?;
    observer.record_metric(&ObserverMetric::DerivationLatency(started.elapsed()));

    let rows = session.deriver().preference_rows(session.record(), user_id);
    for row in &rows {
        if let Err(err) = sink.save_food_preference(row).await {
            observer.record_event(&ObserverEvent::Error {
                component: "profile".into(),
                message: err.to_string(),
            });
            return Err(err);
        }
    }
    observer.record_metric(&ObserverMetric::PreferencesSaved(rows.len() as u64));

    let update = FoodProfileUpdate::from(&tags);
    let profile = match sink.update_profile(user_id, &update).await {
        Ok(profile) => profile,
        Err(err) => {
            observer.record_event(&ObserverEvent::Error {
                component: "profile".into(),
                message: err.to_string(),
            });
            return Err(err);
        }
    };

    observer.record_event(&ObserverEvent::TaggingCompleted {
        user_id: user_id.to_string(),
        tags: update.food_tags,
    });

    Ok(TaggingOutcome {
        tags,
        profile,
        preferences_saved: rows.len(),
    })
}
