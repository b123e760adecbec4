//! Test doubles and builders shared by unit and behaviour tests.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    Candidate, CandidateProfile, EducationEntry, JobPosting, MatchError, MatchResult, Scorer,
    WorkExperience, scorer::require_profile,
};

/// `Scorer` returning a preset total per candidate identifier.
///
/// Candidates without a preset score `0.0`. Missing profiles still yield
/// [`MatchError::DataUnavailable`], matching real scorers.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    totals: HashMap<String, f64>,
}

impl FixedScorer {
    /// Create a scorer from `(candidate id, total)` pairs.
    #[must_use]
    pub fn with_totals<I, K>(totals: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            totals: totals.into_iter().map(|(id, total)| (id.into(), total)).collect(),
        }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, candidate: &Candidate, _job: &JobPosting) -> Result<MatchResult, MatchError> {
        require_profile(candidate)?;
        let total = Self::sanitise(self.totals.get(&candidate.id).copied().unwrap_or_default());
        Ok(MatchResult {
            total_score: total,
            education_score: total,
            experience_score: total,
            skills_score: total,
            eligibility_score: total,
        })
    }
}

/// Fluent builder for [`CandidateProfile`] fixtures.
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    profile: CandidateProfile,
}

impl ProfileBuilder {
    /// Add an education entry with `degree`.
    #[must_use]
    pub fn degree(mut self, degree: &str) -> Self {
        self.profile.education.push(EducationEntry::with_degree(degree));
        self
    }

    /// Add a finished position spanning `start..end`.
    #[must_use]
    pub fn position(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.profile
            .work_experience
            .push(WorkExperience::ended(start, end));
        self
    }

    /// Add a position the candidate still holds.
    #[must_use]
    pub fn current_position(mut self, start: NaiveDate) -> Self {
        self.profile
            .work_experience
            .push(WorkExperience::current(start));
        self
    }

    /// Add a skill.
    #[must_use]
    pub fn skill(mut self, skill: &str) -> Self {
        self.profile.skills.push(skill.to_owned());
        self
    }

    /// Add an eligibility.
    #[must_use]
    pub fn eligibility(mut self, eligibility: &str) -> Self {
        self.profile.eligibility.push(eligibility.to_owned());
        self
    }

    /// Finish the profile.
    #[must_use]
    pub fn build(self) -> CandidateProfile {
        self.profile
    }

    /// Finish the profile and attach it to a candidate.
    #[must_use]
    pub fn candidate(self, id: &str) -> Candidate {
        Candidate::new(id, self.profile)
    }
}
