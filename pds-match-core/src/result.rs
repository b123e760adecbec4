//! Output of a single candidate/job comparison.

/// Composite compatibility score and its four components.
///
/// Every field lies in `0.0..=1.0`. `total_score` is the weighted sum of the
/// components rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MatchResult {
    /// Weighted, rounded total.
    pub total_score: f64,
    /// Highest degree against the required level.
    pub education_score: f64,
    /// Accumulated years against the required range.
    pub experience_score: f64,
    /// Share of required skills the candidate covers.
    pub skills_score: f64,
    /// Share of required eligibilities the candidate covers.
    pub eligibility_score: f64,
}

impl MatchResult {
    /// Components in `education, experience, skills, eligibility` order.
    #[must_use]
    pub const fn components(&self) -> [f64; 4] {
        [
            self.education_score,
            self.experience_score,
            self.skills_score,
            self.eligibility_score,
        ]
    }
}
