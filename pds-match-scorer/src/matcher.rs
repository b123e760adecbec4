//! Weighted composite scorer.
//!
//! [`WeightedMatchScorer`] combines the four component scores with the
//! configured [`MatchWeights`](crate::MatchWeights) and rounds the total to
//! two decimal places. It implements [`Scorer`] so rankings and board
//! queries can use it interchangeably with test doubles.

use chrono::{NaiveDate, Utc};
use log::debug;
use pds_match_core::{
    Candidate, CandidateProfile, JobPosting, JobRequirement, MatchError, MatchResult, Scorer,
    require_profile,
};

use crate::components::{education_score, eligibility_score, experience_score, skills_score};
use crate::normalize::round_to_hundredths;
use crate::{ConfigError, MatchConfig};

/// Composite scorer applying validated weights and tiers.
///
/// The reference date used for current positions is fixed at construction,
/// so repeated calls on the same inputs return identical results.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pds_match_core::{
///     Candidate, CandidateProfile, EducationEntry, EducationLevel, JobPosting, JobRequirement,
/// };
/// use pds_match_scorer::WeightedMatchScorer;
///
/// let scorer = WeightedMatchScorer::with_defaults()
///     .with_reference_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// let job = JobPosting::new(
///     "job-1",
///     "Analyst",
///     JobRequirement {
///         education_level: Some(EducationLevel::Bachelor),
///         ..JobRequirement::default()
///     },
/// );
/// let candidate = Candidate::new(
///     "a-1",
///     CandidateProfile {
///         education: vec![EducationEntry::with_degree("Doctorate")],
///         ..CandidateProfile::default()
///     },
/// );
/// let result = scorer.calculate_match_score(&candidate, &job).unwrap();
/// assert_eq!(result.education_score, 1.0);
/// assert_eq!(result.total_score, 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedMatchScorer {
    config: MatchConfig,
    reference_date: NaiveDate,
}

impl WeightedMatchScorer {
    /// Build a scorer from `config`, dated today.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the weights or tiers fail validation.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validate()?,
            reference_date: Utc::now().date_naive(),
        })
    }

    /// Build a scorer with the default policy, dated today.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            config: MatchConfig::default(),
            reference_date: Utc::now().date_naive(),
        }
    }

    /// Replace the date current positions run until.
    #[must_use]
    pub const fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    /// Date current positions run until.
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score a parsed profile against a requirement.
    #[must_use]
    pub fn score_profile(
        &self,
        profile: &CandidateProfile,
        requirement: &JobRequirement,
    ) -> MatchResult {
        let tiers = &self.config.tiers;
        let education = Self::sanitise(education_score(
            &profile.education,
            requirement.education_level,
            tiers,
        ));
        let experience = Self::sanitise(experience_score(
            &profile.work_experience,
            requirement.experience_years_min,
            requirement.experience_years_max,
            self.reference_date,
            tiers,
        ));
        let skills = Self::sanitise(skills_score(&profile.skills, &requirement.skills));
        let eligibility =
            Self::sanitise(eligibility_score(&profile.eligibility, &requirement.eligibility));
        let combined = self
            .config
            .weights
            .combine([education, experience, skills, eligibility]);

        MatchResult {
            total_score: round_to_hundredths(Self::sanitise(combined)),
            education_score: education,
            experience_score: experience,
            skills_score: skills,
            eligibility_score: eligibility,
        }
    }

    /// Score `candidate` against `job`.
    ///
    /// # Errors
    /// Returns [`MatchError::DataUnavailable`] when the candidate has no
    /// parsed profile.
    pub fn calculate_match_score(
        &self,
        candidate: &Candidate,
        job: &JobPosting,
    ) -> Result<MatchResult, MatchError> {
        let profile = require_profile(candidate)?;
        let result = self.score_profile(profile, &job.requirement);
        debug!(
            "scored candidate {} against job {}: {:.2}",
            candidate.id, job.id, result.total_score
        );
        Ok(result)
    }
}

impl Default for WeightedMatchScorer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Scorer for WeightedMatchScorer {
    fn score(&self, candidate: &Candidate, job: &JobPosting) -> Result<MatchResult, MatchError> {
        self.calculate_match_score(candidate, job)
    }
}
