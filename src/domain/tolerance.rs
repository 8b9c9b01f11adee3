//! Tolerance bands around an observed value.

use std::fmt;

use serde::Serialize;

/// Inclusive range of values accepted as a match for an observed value.
///
/// Bounds are computed with saturating arithmetic: a band that would extend
/// past the `i64` domain is clamped to `i64::MIN` or `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToleranceBand {
    lower: i64,
    upper: i64,
}

impl ToleranceBand {
    /// Band of `actual ± threshold`.
    #[must_use]
    pub fn around(actual: i64, threshold: u64) -> Self {
        Self {
            lower: actual.saturating_sub_unsigned(threshold),
            upper: actual.saturating_add_unsigned(threshold),
        }
    }

    #[must_use]
    pub fn lower(&self) -> i64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> i64 {
        self.upper
    }

    /// Returns true if `value` lies within the band, bounds included.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl fmt::Display for ToleranceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_is_symmetric_around_actual() {
        let band = ToleranceBand::around(105, 10);
        assert_eq!(band.lower(), 95);
        assert_eq!(band.upper(), 115);
        assert!(band.contains(95));
        assert!(band.contains(115));
        assert!(!band.contains(94));
        assert!(!band.contains(116));
    }

    #[test]
    fn zero_threshold_is_exact_match() {
        let band = ToleranceBand::around(50, 0);
        assert!(band.contains(50));
        assert!(!band.contains(49));
        assert!(!band.contains(51));
    }

    #[test]
    fn lower_bound_saturates_at_domain_minimum() {
        let band = ToleranceBand::around(i64::MIN + 3, 10);
        assert_eq!(band.lower(), i64::MIN);
        assert_eq!(band.upper(), i64::MIN + 13);
        assert!(band.contains(i64::MIN));
    }

    #[test]
    fn upper_bound_saturates_at_domain_maximum() {
        let band = ToleranceBand::around(i64::MAX - 1, 5);
        assert_eq!(band.upper(), i64::MAX);
        assert!(band.contains(i64::MAX));
        assert!(!band.contains(i64::MAX - 7));
    }

    #[test]
    fn huge_threshold_covers_whole_domain() {
        let band = ToleranceBand::around(0, u64::MAX);
        assert_eq!(band.lower(), i64::MIN);
        assert_eq!(band.upper(), i64::MAX);
    }

    #[test]
    fn small_actual_does_not_wrap() {
        // 3 - 10 must not wrap into a huge lower bound
        let band = ToleranceBand::around(3, 10);
        assert_eq!(band.lower(), -7);
        assert!(band.contains(0));
    }

    #[test]
    fn display_shows_inclusive_range() {
        assert_eq!(ToleranceBand::around(10, 2).to_string(), "[8, 12]");
    }
}
