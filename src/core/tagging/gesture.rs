use super::types::{ResponseIntensity, SwipeDirection};
use crate::config::TaggingConfig;

/// Turns raw card drags and button taps into response intensities.
///
/// A drag shorter than `commit_ratio × width` is not a decision: the card
/// springs back. Beyond `intensify_ratio × width` it becomes `love`/`hate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureClassifier {
    commit_ratio: f64,
    intensify_ratio: f64,
}

impl GestureClassifier {
    pub fn new(commit_ratio: f64, intensify_ratio: f64) -> Self {
        Self {
            commit_ratio,
            intensify_ratio,
        }
    }

    pub fn from_config(config: &TaggingConfig) -> Self {
        Self::new(config.commit_ratio, config.intensify_ratio)
    }

    /// Classifies a horizontal drag of `dx` against a reference `width`.
    pub fn classify_drag(&self, dx: f64, width: f64) -> Option<ResponseIntensity> {
        if !dx.is_finite() || !width.is_finite() || width <= 0.0 {
            return None;
        }
        let distance = dx.abs();
        if distance <= self.commit_ratio * width {
            return None;
        }
        let direction = if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        };
        Some(direction.intensity(distance > self.intensify_ratio * width))
    }

    /// Button taps never carry intensity.
    pub fn classify_tap(&self, direction: SwipeDirection) -> ResponseIntensity {
        direction.intensity(false)
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::from_config(&TaggingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 400.0;

    #[test]
    fn short_drag_springs_back() {
        let classifier = GestureClassifier::default();
        assert_eq!(classifier.classify_drag(100.0, WIDTH), None);
        assert_eq!(classifier.classify_drag(-110.0, WIDTH), None);
    }

    #[test]
    fn mild_drags_map_to_like_and_dislike() {
        let classifier = GestureClassifier::default();
        assert_eq!(
            classifier.classify_drag(200.0, WIDTH),
            Some(ResponseIntensity::Like)
        );
        assert_eq!(
            classifier.classify_drag(-200.0, WIDTH),
            Some(ResponseIntensity::Dislike)
        );
    }

    #[test]
    fn long_drags_intensify() {
        let classifier = GestureClassifier::default();
        assert_eq!(
            classifier.classify_drag(300.0, WIDTH),
            Some(ResponseIntensity::Love)
        );
        assert_eq!(
            classifier.classify_drag(-300.0, WIDTH),
            Some(ResponseIntensity::Hate)
        );
    }

    #[test]
    fn exactly_at_intensify_threshold_stays_mild() {
        let classifier = GestureClassifier::new(0.25, 0.75);
        assert_eq!(
            classifier.classify_drag(300.0, WIDTH),
            Some(ResponseIntensity::Like)
        );
    }

    #[test]
    fn degenerate_width_is_not_a_decision() {
        let classifier = GestureClassifier::default();
        assert_eq!(classifier.classify_drag(50.0, 0.0), None);
        assert_eq!(classifier.classify_drag(f64::NAN, WIDTH), None);
    }

    #[test]
    fn taps_are_mild() {
        let classifier = GestureClassifier::default();
        assert_eq!(
            classifier.classify_tap(SwipeDirection::Right),
            ResponseIntensity::Like
        );
        assert_eq!(
            classifier.classify_tap(SwipeDirection::Left),
            ResponseIntensity::Dislike
        );
    }
}
