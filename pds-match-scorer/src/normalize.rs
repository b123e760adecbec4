//! Text and number normalisation shared by the component scores.

/// Lower-case text for comparison. Whitespace is kept as written.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Whether two case-folded strings overlap: either contains the other.
///
/// Matching is loose, so `"java"` matches `"javascript"`. An empty string is
/// contained in every string and therefore matches anything.
///
/// # Examples
/// ```
/// use pds_match_scorer::normalize::loosely_matches;
///
/// assert!(loosely_matches("java", "javascript"));
/// assert!(loosely_matches("project management", "management"));
/// assert!(!loosely_matches("react", "vue"));
/// assert!(loosely_matches("", "vue"));
/// assert!(!loosely_matches("c ", "c++"));
/// ```
#[must_use]
pub fn loosely_matches(required: &str, offered: &str) -> bool {
    offered.contains(required) || required.contains(offered)
}

/// Round to two decimal places, halves away from zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by one hundred"
)]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `numerator / denominator` as a fraction, `0.0` when the denominator is
/// zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "match counts are small and converted to a ratio"
)]
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
