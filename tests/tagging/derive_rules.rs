use tablemate::core::tagging::{PersonalityTag, ResponseIntensity, ResponseRecord};
use tablemate::error::TaggingError;

use super::tagging_harness::{CATALOG_SIZE, deriver, labels, likes_at, record_of};

use ResponseIntensity::{Dislike, Hate, Like, Love};

#[test]
fn all_dislike_is_classic_tastes_only() {
    let record = record_of([Dislike; CATALOG_SIZE]);
    assert_eq!(labels(&deriver(), &record), vec!["Classic Tastes"]);
}

#[test]
fn all_hate_matches_all_dislike() {
    let d = deriver();
    assert_eq!(
        labels(&d, &record_of([Hate; CATALOG_SIZE])),
        labels(&d, &record_of([Dislike; CATALOG_SIZE]))
    );
}

#[test]
fn all_love_emits_six_tags_in_rule_order() {
    let record = record_of([Love; CATALOG_SIZE]);
    assert_eq!(
        labels(&deriver(), &record),
        vec![
            "Spice Warrior",
            "Sweet Tooth",
            "Street Food Lover",
            "Adventure Seeker",
            "Health Conscious",
            "Fine Dining",
        ]
    );
}

#[test]
fn all_like_skips_fine_dining() {
    let tags = deriver().derive_tags(&record_of([Like; CATALOG_SIZE])).unwrap();
    assert!(tags.contains(PersonalityTag::AdventureSeeker));
    assert!(!tags.contains(PersonalityTag::FineDining));
}

#[test]
fn derivation_is_idempotent() {
    let d = deriver();
    let record = likes_at(&[0, 2, 5, 8]);
    assert_eq!(d.derive_tags(&record).unwrap(), d.derive_tags(&record).unwrap());
}

#[test]
fn three_positives_sit_in_the_lower_dead_zone() {
    // Exactly 30% positive: neither Classic Tastes nor Adventure Seeker.
    let tags = deriver().derive_tags(&likes_at(&[0, 1, 2])).unwrap();
    assert!(!tags.contains(PersonalityTag::ClassicTastes));
    assert!(!tags.contains(PersonalityTag::AdventureSeeker));
}

#[test]
fn seven_positives_sit_in_the_upper_dead_zone() {
    let record = likes_at(&[0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(
        labels(&deriver(), &record),
        vec!["Spice Warrior", "Sweet Tooth", "Street Food Lover"]
    );
}

#[test]
fn eight_positives_cross_into_adventure() {
    let tags = deriver()
        .derive_tags(&likes_at(&[0, 1, 2, 3, 4, 5, 6, 7]))
        .unwrap();
    assert!(tags.contains(PersonalityTag::AdventureSeeker));
}

#[test]
fn two_positives_are_classic() {
    let tags = deriver().derive_tags(&likes_at(&[3, 9])).unwrap();
    assert_eq!(tags.as_slice(), &[PersonalityTag::ClassicTastes]);
}

#[test]
fn foodie_is_the_fallback() {
    // Three positives outside every category rule, no loves.
    let record = likes_at(&[3, 4, 5]);
    assert_eq!(labels(&deriver(), &record), vec!["Foodie"]);
}

#[test]
fn foodie_never_accompanies_other_tags() {
    for indices in [&[0usize][..], &[8], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]] {
        let tags = deriver().derive_tags(&likes_at(indices)).unwrap();
        assert!(!tags.contains(PersonalityTag::Foodie) || tags.len() == 1);
    }
}

#[test]
fn fine_dining_needs_three_loves() {
    let mut answers = [Dislike; CATALOG_SIZE];
    answers[3] = Love;
    answers[4] = Love;
    let d = deriver();
    assert!(!d.derive_tags(&record_of(answers)).unwrap().contains(PersonalityTag::FineDining));

    answers[5] = Love;
    assert!(d.derive_tags(&record_of(answers)).unwrap().contains(PersonalityTag::FineDining));
}

#[test]
fn incomplete_record_is_rejected() {
    let mut record = ResponseRecord::new(CATALOG_SIZE);
    for index in 0..9 {
        record.record_response(index, Like).unwrap();
    }
    assert_eq!(
        deriver().derive_tags(&record).unwrap_err(),
        TaggingError::IncompleteSession {
            answered: 9,
            required: 10
        }
    );
}

#[test]
fn last_answer_wins() {
    let mut record = record_of([Dislike; CATALOG_SIZE]);
    let previous = record.record_response(0, Like).unwrap();
    assert_eq!(previous, Some(Dislike));

    let tags = deriver().derive_tags(&record).unwrap();
    assert!(tags.contains(PersonalityTag::SpiceWarrior));
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut record = ResponseRecord::new(CATALOG_SIZE);
    assert_eq!(
        record.record_response(CATALOG_SIZE, Like).unwrap_err(),
        TaggingError::InvalidIndex {
            index: 10,
            catalog_size: 10
        }
    );
}
