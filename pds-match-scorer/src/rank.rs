//! Rank jobs for a candidate or candidates for a job.
//!
//! Both directions score every pair, sort by total descending with ties kept
//! in input order, and truncate to the requested limit. Pairs whose
//! candidate has no parsed profile are dropped with a warning; any other
//! scoring failure aborts the ranking.

use log::warn;
use pds_match_core::{Candidate, JobPosting, MatchError, MatchResult, Scorer};

/// Number of results returned when the caller does not choose a limit.
pub const DEFAULT_RANK_LIMIT: usize = 10;

/// A job ranked for one candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct JobMatch<'a> {
    /// Ranked posting.
    pub job: &'a JobPosting,
    /// Total score used for ordering.
    pub match_score: f64,
    /// Full component breakdown.
    pub match_details: MatchResult,
}

/// A candidate ranked for one job.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct CandidateMatch<'a> {
    /// Ranked candidate.
    pub candidate: &'a Candidate,
    /// Total score used for ordering.
    pub match_score: f64,
    /// Full component breakdown.
    pub match_details: MatchResult,
}

/// Rank `jobs` for `candidate`, best first.
///
/// # Errors
/// Returns [`MatchError::InvalidArgument`] when `limit` is zero, and
/// propagates scorer failures other than
/// [`MatchError::DataUnavailable`].
///
/// # Examples
/// ```
/// use pds_match_core::{
///     CandidateProfile, Candidate, JobPosting, JobRequirement, test_support::FixedScorer,
/// };
/// use pds_match_scorer::rank_jobs_for_candidate;
///
/// let jobs = [
///     JobPosting::new("a", "A", JobRequirement::default()),
///     JobPosting::new("b", "B", JobRequirement::default()),
/// ];
/// let candidate = Candidate::new("c-1", CandidateProfile::default());
/// let scorer = FixedScorer::with_totals([("c-1", 0.4)]);
/// let ranked = rank_jobs_for_candidate(&scorer, &candidate, &jobs, 1).unwrap();
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].job.id, "a");
/// ```
pub fn rank_jobs_for_candidate<'a, S, I>(
    scorer: &S,
    candidate: &Candidate,
    jobs: I,
    limit: usize,
) -> Result<Vec<JobMatch<'a>>, MatchError>
where
    S: Scorer + ?Sized,
    I: IntoIterator<Item = &'a JobPosting>,
{
    let ranked = rank_by(limit, jobs, |job| scorer.score(candidate, job))?;
    Ok(ranked
        .into_iter()
        .map(|(job, details)| JobMatch {
            job,
            match_score: details.total_score,
            match_details: details,
        })
        .collect())
}

/// Rank `candidates` for `job`, best first.
///
/// Candidates without a parsed profile are skipped.
///
/// # Errors
/// Returns [`MatchError::InvalidArgument`] when `limit` is zero, and
/// propagates scorer failures other than
/// [`MatchError::DataUnavailable`].
pub fn rank_candidates_for_job<'a, S, I>(
    scorer: &S,
    job: &JobPosting,
    candidates: I,
    limit: usize,
) -> Result<Vec<CandidateMatch<'a>>, MatchError>
where
    S: Scorer + ?Sized,
    I: IntoIterator<Item = &'a Candidate>,
{
    let ranked = rank_by(limit, candidates, |candidate| scorer.score(candidate, job))?;
    Ok(ranked
        .into_iter()
        .map(|(candidate, details)| CandidateMatch {
            candidate,
            match_score: details.total_score,
            match_details: details,
        })
        .collect())
}

pub(crate) fn check_limit(limit: usize) -> Result<usize, MatchError> {
    if limit == 0 {
        return Err(MatchError::InvalidArgument {
            argument: "limit",
            reason: "must be at least 1".to_owned(),
        });
    }
    Ok(limit)
}

fn rank_by<T, I, F>(limit: usize, items: I, mut score: F) -> Result<Vec<(T, MatchResult)>, MatchError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<MatchResult, MatchError>,
{
    let checked = check_limit(limit)?;
    let mut scored = Vec::new();
    for item in items {
        match score(&item) {
            Ok(result) => scored.push((item, result)),
            Err(MatchError::DataUnavailable { candidate_id }) => {
                warn!("skipping candidate {candidate_id}: no parsed profile");
            }
            Err(other) => return Err(other),
        }
    }
    scored.sort_by(|(_, a), (_, b)| b.total_score.total_cmp(&a.total_score));
    scored.truncate(checked);
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pds_match_core::{CandidateProfile, JobRequirement, test_support::FixedScorer};
    use rstest::rstest;

    /// Scores every job by a preset total keyed on the job id.
    struct PerJobScorer(Vec<(&'static str, f64)>);

    impl Scorer for PerJobScorer {
        fn score(
            &self,
            _candidate: &Candidate,
            job: &JobPosting,
        ) -> Result<MatchResult, MatchError> {
            let total = self
                .0
                .iter()
                .find(|(id, _)| *id == job.id)
                .map_or(0.0, |(_, total)| *total);
            Ok(MatchResult {
                total_score: total,
                ..MatchResult::default()
            })
        }
    }

    fn jobs(ids: &[&str]) -> Vec<JobPosting> {
        ids.iter()
            .map(|id| JobPosting::new(*id, *id, JobRequirement::default()))
            .collect()
    }

    #[rstest]
    fn keeps_the_best_jobs_in_order() {
        let postings = jobs(&["j1", "j2", "j3"]);
        let scorer = PerJobScorer(vec![("j1", 0.9), ("j2", 0.4), ("j3", 0.7)]);
        let candidate = Candidate::new("c", CandidateProfile::default());
        let ranked =
            rank_jobs_for_candidate(&scorer, &candidate, &postings, 2).expect("ranking succeeds");
        let scores: Vec<_> = ranked.iter().map(|m| m.match_score).collect();
        assert_eq!(scores, [0.9, 0.7]);
        let ids: Vec<_> = ranked.iter().map(|m| m.job.id.as_str()).collect();
        assert_eq!(ids, ["j1", "j3"]);
    }

    #[rstest]
    fn ties_keep_input_order() {
        let postings = jobs(&["first", "second", "third"]);
        let scorer = PerJobScorer(vec![("first", 0.5), ("second", 0.8), ("third", 0.5)]);
        let candidate = Candidate::new("c", CandidateProfile::default());
        let ranked = rank_jobs_for_candidate(&scorer, &candidate, &postings, DEFAULT_RANK_LIMIT)
            .expect("ranking succeeds");
        let ids: Vec<_> = ranked.iter().map(|m| m.job.id.as_str()).collect();
        assert_eq!(ids, ["second", "first", "third"]);
    }

    #[rstest]
    fn unprofiled_candidates_are_dropped() {
        let job = JobPosting::new("j", "t", JobRequirement::default());
        let candidates = [
            Candidate::new("a", CandidateProfile::default()),
            Candidate::without_profile("b"),
            Candidate::new("c", CandidateProfile::default()),
        ];
        let scorer = FixedScorer::with_totals([("a", 0.2), ("c", 0.6)]);
        let ranked = rank_candidates_for_job(&scorer, &job, &candidates, DEFAULT_RANK_LIMIT)
            .expect("ranking succeeds");
        let ids: Vec<_> = ranked.iter().map(|m| m.candidate.id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);
    }

    #[rstest]
    fn zero_limit_is_invalid() {
        let job = JobPosting::new("j", "t", JobRequirement::default());
        let err = rank_candidates_for_job(&FixedScorer::default(), &job, std::iter::empty(), 0)
            .expect_err("zero limit");
        assert!(matches!(
            err,
            MatchError::InvalidArgument {
                argument: "limit",
                ..
            }
        ));
    }

    #[rstest]
    fn other_errors_propagate() {
        struct Failing;
        impl Scorer for Failing {
            fn score(&self, _: &Candidate, job: &JobPosting) -> Result<MatchResult, MatchError> {
                Err(MatchError::NotFound {
                    kind: pds_match_core::RecordKind::Job,
                    id: job.id.clone(),
                })
            }
        }
        let postings = jobs(&["j1"]);
        let candidate = Candidate::new("c", CandidateProfile::default());
        let err = rank_jobs_for_candidate(&Failing, &candidate, &postings, 1)
            .expect_err("scorer failure");
        assert!(matches!(err, MatchError::NotFound { .. }));
    }
}
