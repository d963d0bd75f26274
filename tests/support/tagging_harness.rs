#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tablemate::core::BoxFuture;
use tablemate::core::profile::{ProfileSink, StoredPreference, UserProfile};
use tablemate::core::tagging::{
    FoodPreferenceRow, FoodProfileUpdate, ProbeCatalog, ResponseIntensity, ResponseRecord,
    TagDeriver, TagRules,
};
use tablemate::error::{ProfileError, Result};
use tablemate::runtime::observability::{Observer, ObserverEvent, ObserverMetric};

pub const CATALOG_SIZE: usize = 10;

pub fn deriver() -> TagDeriver {
    TagDeriver::new(Arc::new(ProbeCatalog::default_catalog()), TagRules::default())
}

/// Complete record for the default catalog, one intensity per probe.
pub fn record_of(answers: [ResponseIntensity; CATALOG_SIZE]) -> ResponseRecord {
    let mut record = ResponseRecord::new(CATALOG_SIZE);
    for (index, intensity) in answers.into_iter().enumerate() {
        record.record_response(index, intensity).unwrap();
    }
    record
}

/// `Like` at each listed index, `Dislike` everywhere else.
pub fn likes_at(indices: &[usize]) -> ResponseRecord {
    let mut answers = [ResponseIntensity::Dislike; CATALOG_SIZE];
    for &i in indices {
        answers[i] = ResponseIntensity::Like;
    }
    record_of(answers)
}

pub fn labels(deriver: &TagDeriver, record: &ResponseRecord) -> Vec<String> {
    deriver.derive_tags(record).unwrap().labels()
}

#[derive(Default)]
pub struct RecordingObserver {
    pub events: Mutex<Vec<ObserverEvent>>,
    pub metrics: Mutex<Vec<ObserverMetric>>,
}

impl RecordingObserver {
    pub fn completed(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| matches!(e, ObserverEvent::TaggingCompleted { .. }))
            .count()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                ObserverEvent::Error { message, .. } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Observer for RecordingObserver {
    fn record_event(&self, event: &ObserverEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn record_metric(&self, metric: &ObserverMetric) {
        self.metrics.lock().unwrap().push(metric.clone());
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Sink whose writes always fail, counting attempts.
#[derive(Default)]
pub struct FailingSink {
    pub attempts: Mutex<usize>,
}

impl ProfileSink for FailingSink {
    fn save_food_preference<'a>(
        &'a self,
        _row: &'a FoodPreferenceRow,
    ) -> BoxFuture<'a, Result<StoredPreference>> {
        Box::pin(async move {
            *self.attempts.lock().unwrap() += 1;
            Err(ProfileError::Store("connection refused".into()).into())
        })
    }

    fn update_profile<'a>(
        &'a self,
        user_id: &'a str,
        _update: &'a FoodProfileUpdate,
    ) -> BoxFuture<'a, Result<UserProfile>> {
        Box::pin(async move { Err(ProfileError::NotFound(user_id.to_string()).into()) })
    }

    fn get_profile<'a>(&'a self, _user_id: &'a str) -> BoxFuture<'a, Result<Option<UserProfile>>> {
        Box::pin(async move { Ok(None) })
    }
}
