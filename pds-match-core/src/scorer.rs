//! Score candidates against job postings.
//!
//! The `Scorer` trait assigns a [`MatchResult`](crate::MatchResult) to a
//! [`Candidate`](crate::Candidate) given a [`JobPosting`](crate::JobPosting).

use crate::{Candidate, JobPosting, MatchError, MatchResult};

/// Calculate the compatibility between a candidate and a job.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so rankings can be
/// evaluated across threads, and must be pure: identical inputs yield
/// identical results.
///
/// Implementations must:
/// - Return [`MatchError::DataUnavailable`] when the candidate has no parsed
///   profile, rather than a zero score.
/// - Produce finite scores normalised to `0.0..=1.0`.
///
/// Use [`Scorer::sanitise`] to apply the range guard.
///
/// # Examples
///
/// ```rust
/// use pds_match_core::{
///     Candidate, CandidateProfile, JobPosting, JobRequirement, MatchError, MatchResult, Scorer,
/// };
///
/// struct PerfectScorer;
///
/// impl Scorer for PerfectScorer {
///     fn score(&self, candidate: &Candidate, _job: &JobPosting) -> Result<MatchResult, MatchError> {
///         candidate.profile().ok_or_else(|| MatchError::DataUnavailable {
///             candidate_id: candidate.id.clone(),
///         })?;
///         Ok(MatchResult { total_score: 1.0, ..MatchResult::default() })
///     }
/// }
///
/// let job = JobPosting::new("j", "Clerk", JobRequirement::default());
/// let candidate = Candidate::new("c", CandidateProfile::default());
/// assert_eq!(PerfectScorer.score(&candidate, &job).map(|r| r.total_score), Ok(1.0));
/// ```
pub trait Scorer: Send + Sync {
    /// Score `candidate` against `job`.
    ///
    /// # Errors
    /// Returns [`MatchError::DataUnavailable`] when the candidate has no
    /// parsed profile.
    fn score(&self, candidate: &Candidate, job: &JobPosting) -> Result<MatchResult, MatchError>;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

/// Fetch the candidate's profile or report it as unavailable.
///
/// # Errors
/// Returns [`MatchError::DataUnavailable`] when no profile is present.
pub fn require_profile(candidate: &Candidate) -> Result<&crate::CandidateProfile, MatchError> {
    candidate
        .profile()
        .ok_or_else(|| MatchError::DataUnavailable {
            candidate_id: candidate.id.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CandidateProfile, JobRequirement};
    use rstest::rstest;

    struct ConstantScorer(f64);

    impl Scorer for ConstantScorer {
        fn score(&self, candidate: &Candidate, _job: &JobPosting) -> Result<MatchResult, MatchError> {
            require_profile(candidate)?;
            Ok(MatchResult {
                total_score: Self::sanitise(self.0),
                ..MatchResult::default()
            })
        }
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(-0.2, 0.0)]
    #[case(1.4, 1.0)]
    #[case(0.55, 0.55)]
    fn sanitise_clamps_and_filters(#[case] raw: f64, #[case] expected: f64) {
        let job = JobPosting::new("j", "t", JobRequirement::default());
        let candidate = Candidate::new("c", CandidateProfile::default());
        let result = ConstantScorer(raw)
            .score(&candidate, &job)
            .expect("profile present");
        assert_eq!(result.total_score, expected);
    }

    #[rstest]
    fn missing_profile_is_reported() {
        let job = JobPosting::new("j", "t", JobRequirement::default());
        let candidate = Candidate::without_profile("c");
        let err = ConstantScorer(1.0)
            .score(&candidate, &job)
            .expect_err("no profile");
        assert_eq!(
            err,
            MatchError::DataUnavailable {
                candidate_id: "c".into()
            }
        );
    }
}
