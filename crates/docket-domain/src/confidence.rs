//! Confidence score module

/// Heuristic estimate of extraction quality, always within [0.0, 1.0]
///
/// Used only for ranking suggestions against each other; it is not a
/// calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ConfidenceScore(f64);

impl ConfidenceScore {
    /// Lowest representable score
    pub const MIN: ConfidenceScore = ConfidenceScore(0.0);

    /// Highest representable score
    pub const MAX: ConfidenceScore = ConfidenceScore(1.0);

    /// Create a score, clamping the raw value into [0, 1]
    ///
    /// NaN collapses to 0.0 so the invariant holds for any input.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::MIN;
        }
        Self(raw.clamp(0.0, 1.0))
    }

    /// Get the underlying value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total ordering over scores (for sorting)
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_within_bounds_is_kept() {
        assert_eq!(ConfidenceScore::new(0.75).value(), 0.75);
    }

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(ConfidenceScore::new(1.25).value(), 1.0);
        assert_eq!(ConfidenceScore::new(-0.3).value(), 0.0);
    }

    #[test]
    fn test_nan_becomes_zero() {
        assert_eq!(ConfidenceScore::new(f64::NAN), ConfidenceScore::MIN);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any raw input yields a score in [0, 1]
        #[test]
        fn test_score_always_bounded(raw in proptest::num::f64::ANY) {
            let score = ConfidenceScore::new(raw).value();
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
