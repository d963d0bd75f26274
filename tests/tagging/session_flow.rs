use tablemate::core::tagging::{
    GestureClassifier, PersonalityTag, ResponseIntensity, SessionState, SwipeDirection,
    TaggingSession, is_session_complete,
};
use tablemate::error::TaggingError;

use super::tagging_harness::{CATALOG_SIZE, deriver};

use ResponseIntensity::{Dislike, Like, Love};

#[test]
fn answering_in_order_completes_the_session() {
    let mut session = TaggingSession::new(deriver());
    for i in 0..CATALOG_SIZE {
        assert_eq!(session.current_index(), Some(i));
        let state = session.answer_current(Dislike).unwrap();
        let expected = if i + 1 == CATALOG_SIZE {
            SessionState::Complete
        } else {
            SessionState::Answering
        };
        assert_eq!(state, expected);
    }
    assert_eq!(session.current_index(), None);
    assert!(is_session_complete(session.record(), CATALOG_SIZE));
}

#[test]
fn derive_runs_exactly_once() {
    let mut session = TaggingSession::new(deriver());
    for _ in 0..CATALOG_SIZE {
        session.answer_current(Love).unwrap();
    }
    let tags = session.derive().unwrap();
    assert!(tags.contains(PersonalityTag::FineDining));
    assert_eq!(session.state(), SessionState::Derived);

    assert_eq!(session.derive().unwrap_err(), TaggingError::AlreadyDerived);
    assert_eq!(
        session.record_response(0, Dislike).unwrap_err(),
        TaggingError::AlreadyDerived
    );
}

#[test]
fn derive_before_completion_reports_progress() {
    let mut session = TaggingSession::new(deriver());
    session.answer_current(Like).unwrap();
    session.answer_current(Like).unwrap();
    assert_eq!(
        session.derive().unwrap_err(),
        TaggingError::IncompleteSession {
            answered: 2,
            required: 10
        }
    );
    // The failed attempt does not consume the session.
    assert_eq!(session.state(), SessionState::Answering);
}

#[test]
fn out_of_order_answers_keep_cursor_on_first_gap() {
    let mut session = TaggingSession::new(deriver());
    session.record_response(1, Like).unwrap();
    session.record_response(2, Like).unwrap();
    assert_eq!(session.current_index(), Some(0));

    session.answer_current(Like).unwrap();
    assert_eq!(session.current_index(), Some(3));
}

#[test]
fn overwrite_before_derive_takes_last_answer() {
    let mut session = TaggingSession::new(deriver());
    for _ in 0..CATALOG_SIZE {
        session.answer_current(Dislike).unwrap();
    }
    session.record_response(8, Love).unwrap();
    assert_eq!(session.state(), SessionState::Complete);

    let tags = session.derive().unwrap();
    assert!(tags.contains(PersonalityTag::HealthConscious));
}

#[test]
fn swipes_feed_the_session() {
    let classifier = GestureClassifier::default();
    let width = 400.0;
    let mut session = TaggingSession::new(deriver());

    // 80 px is under the commit threshold; the card springs back.
    for dx in [300.0, 80.0, -150.0, 150.0, -300.0] {
        if let Some(intensity) = classifier.classify_drag(dx, width) {
            session.answer_current(intensity).unwrap();
        }
    }

    let record = session.record();
    assert_eq!(record.answered(), 4);
    assert_eq!(record.get(0), Some(Love));
    assert_eq!(record.get(1), Some(Dislike));
    assert_eq!(record.get(2), Some(Like));
    assert_eq!(record.get(3), Some(ResponseIntensity::Hate));
}

#[test]
fn taps_are_mild() {
    let classifier = GestureClassifier::default();
    assert_eq!(classifier.classify_tap(SwipeDirection::Right), Like);
    assert_eq!(classifier.classify_tap(SwipeDirection::Left), Dislike);
}
