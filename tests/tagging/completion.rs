use tablemate::core::profile::{InMemoryProfileStore, ProfileSink, UserProfile};
use tablemate::core::tagging::{ResponseIntensity, SessionState, TaggingSession, complete_tagging};
use tablemate::error::{ProfileError, TablemateError, TaggingError};

use super::tagging_harness::{CATALOG_SIZE, FailingSink, RecordingObserver, deriver};

fn completed_session(intensity: ResponseIntensity) -> TaggingSession {
    let mut session = TaggingSession::new(deriver());
    for _ in 0..CATALOG_SIZE {
        session.answer_current(intensity).unwrap();
    }
    session
}

#[tokio::test]
async fn completion_persists_rows_and_profile() {
    let store = InMemoryProfileStore::new();
    store
        .create_profile(UserProfile::new("u-1", "u1@example.com", "Jo"))
        .unwrap();
    let observer = RecordingObserver::default();
    let mut session = completed_session(ResponseIntensity::Love);

    let outcome = complete_tagging(&mut session, "u-1", &store, &observer)
        .await
        .unwrap();

    assert_eq!(outcome.preferences_saved, CATALOG_SIZE);
    assert_eq!(outcome.profile.food_tags, outcome.tags.labels());
    assert_eq!(observer.completed(), 1);

    let rows = store.food_preferences("u-1").unwrap();
    assert_eq!(rows.len(), CATALOG_SIZE);
    assert!(rows.iter().all(|r| r.row.preference == ResponseIntensity::Love));

    let profile = store.get_profile("u-1").await.unwrap().unwrap();
    assert!(profile.food_tags.contains(&"Fine Dining".to_string()));
}

#[tokio::test]
async fn incomplete_session_writes_nothing() {
    let store = InMemoryProfileStore::new();
    store
        .create_profile(UserProfile::new("u-2", "u2@example.com", "Sam"))
        .unwrap();
    let observer = RecordingObserver::default();
    let mut session = TaggingSession::new(deriver());
    session.answer_current(ResponseIntensity::Like).unwrap();

    let err = complete_tagging(&mut session, "u-2", &store, &observer)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TablemateError::Tagging(TaggingError::IncompleteSession { .. })
    ));
    assert!(store.food_preferences("u-2").unwrap().is_empty());
    assert_eq!(observer.completed(), 0);
}

#[tokio::test]
async fn sink_failure_is_not_retried() {
    let sink = FailingSink::default();
    let observer = RecordingObserver::default();
    let mut session = completed_session(ResponseIntensity::Dislike);

    let err = complete_tagging(&mut session, "u-3", &sink, &observer)
        .await
        .unwrap_err();

    assert!(matches!(err, TablemateError::Profile(ProfileError::Store(_))));
    assert_eq!(*sink.attempts.lock().unwrap(), 1);
    assert_eq!(observer.errors().len(), 1);
    // Tags were derived before the write, so the session is spent.
    assert_eq!(session.state(), SessionState::Derived);
}

#[tokio::test]
async fn unknown_user_profile_update_fails() {
    let store = InMemoryProfileStore::new();
    let observer = RecordingObserver::default();
    let mut session = completed_session(ResponseIntensity::Like);

    let err = complete_tagging(&mut session, "nobody", &store, &observer)
        .await
        .unwrap_err();

    assert!(matches!(err, TablemateError::Profile(ProfileError::NotFound(_))));
    assert_eq!(store.food_preferences("nobody").unwrap().len(), CATALOG_SIZE);
}

#[test]
fn completion_runs_under_block_on() {
    let store = InMemoryProfileStore::new();
    store
        .create_profile(UserProfile::new("u-4", "u4@example.com", "Ari"))
        .unwrap();
    let observer = RecordingObserver::default();
    let mut session = completed_session(ResponseIntensity::Dislike);

    let outcome =
        tokio_test::block_on(complete_tagging(&mut session, "u-4", &store, &observer)).unwrap();
    assert_eq!(outcome.tags.labels(), vec!["Classic Tastes"]);
}
