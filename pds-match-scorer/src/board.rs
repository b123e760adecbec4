//! Queries that resolve identifiers through a [`JobBoard`] before scoring.

use chrono::{DateTime, Utc};
use pds_match_core::{JobBoard, MatchError, MatchResult, Scorer, require_profile};

use crate::{CandidateMatch, JobMatch, rank_candidates_for_job, rank_jobs_for_candidate};

/// Rank the board's open jobs for one candidate.
///
/// # Errors
/// Returns [`MatchError::NotFound`] for an unknown candidate,
/// [`MatchError::DataUnavailable`] when that candidate has no parsed
/// profile, and [`MatchError::InvalidArgument`] for a zero `limit`.
pub fn find_matching_jobs<'a, B, S>(
    board: &'a B,
    scorer: &S,
    candidate_id: &str,
    now: DateTime<Utc>,
    limit: usize,
) -> Result<Vec<JobMatch<'a>>, MatchError>
where
    B: JobBoard + ?Sized,
    S: Scorer + ?Sized,
{
    let candidate = board.candidate(candidate_id)?;
    require_profile(candidate)?;
    rank_jobs_for_candidate(scorer, candidate, board.open_jobs(now), limit)
}

/// Rank every board candidate for one job, skipping unprofiled candidates.
///
/// # Errors
/// Returns [`MatchError::NotFound`] for an unknown job and
/// [`MatchError::InvalidArgument`] for a zero `limit`.
pub fn find_matching_candidates<'a, B, S>(
    board: &'a B,
    scorer: &S,
    job_id: &str,
    limit: usize,
) -> Result<Vec<CandidateMatch<'a>>, MatchError>
where
    B: JobBoard + ?Sized,
    S: Scorer + ?Sized,
{
    let job = board.job(job_id)?;
    rank_candidates_for_job(scorer, job, board.candidates(), limit)
}

/// Score a single candidate/job pair by identifier.
///
/// # Errors
/// Returns [`MatchError::NotFound`] for an unknown identifier and
/// [`MatchError::DataUnavailable`] when the candidate has no parsed profile.
pub fn score_pair<B, S>(
    board: &B,
    scorer: &S,
    candidate_id: &str,
    job_id: &str,
) -> Result<MatchResult, MatchError>
where
    B: JobBoard + ?Sized,
    S: Scorer + ?Sized,
{
    let job = board.job(job_id)?;
    let candidate = board.candidate(candidate_id)?;
    scorer.score(candidate, job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pds_match_core::{
        Candidate, CandidateProfile, JobPosting, JobRequirement, JobStatus, MemoryJobBoard,
        RecordKind, test_support::FixedScorer,
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn board() -> MemoryJobBoard {
        MemoryJobBoard::new(
            vec![
                JobPosting::new("open-1", "Clerk", JobRequirement::default()),
                JobPosting::new("closed", "Clerk", JobRequirement::default())
                    .with_status(JobStatus::Closed),
                JobPosting::new("expired", "Clerk", JobRequirement::default())
                    .with_expiry(Utc::now() - Duration::days(2)),
                JobPosting::new("open-2", "Clerk", JobRequirement::default()),
            ],
            vec![
                Candidate::new("a-1", CandidateProfile::default()),
                Candidate::without_profile("a-2"),
            ],
        )
    }

    #[fixture]
    fn scorer() -> FixedScorer {
        FixedScorer::with_totals([("a-1", 0.5)])
    }

    #[rstest]
    fn jobs_for_candidate_only_rank_open_postings(board: MemoryJobBoard, scorer: FixedScorer) {
        let ranked =
            find_matching_jobs(&board, &scorer, "a-1", Utc::now(), 10).expect("query succeeds");
        let ids: Vec<_> = ranked.iter().map(|m| m.job.id.as_str()).collect();
        assert_eq!(ids, ["open-1", "open-2"]);
    }

    #[rstest]
    fn jobs_for_unprofiled_candidate_fail(board: MemoryJobBoard, scorer: FixedScorer) {
        let err = find_matching_jobs(&board, &scorer, "a-2", Utc::now(), 10)
            .expect_err("no profile");
        assert!(err.is_data_unavailable());
    }

    #[rstest]
    fn candidates_for_job_skip_unprofiled(board: MemoryJobBoard, scorer: FixedScorer) {
        let ranked =
            find_matching_candidates(&board, &scorer, "closed", 10).expect("query succeeds");
        assert_eq!(ranked.len(), 1);
    }

    #[rstest]
    #[case("missing", "open-1", RecordKind::Candidate)]
    #[case("a-1", "missing", RecordKind::Job)]
    fn unknown_identifiers_are_not_found(
        board: MemoryJobBoard,
        scorer: FixedScorer,
        #[case] candidate_id: &str,
        #[case] job_id: &str,
        #[case] expected: RecordKind,
    ) {
        match score_pair(&board, &scorer, candidate_id, job_id) {
            Err(MatchError::NotFound { kind, id }) => {
                assert_eq!(kind, expected);
                assert_eq!(id, "missing");
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[rstest]
    fn pair_score_uses_the_scorer(board: MemoryJobBoard, scorer: FixedScorer) {
        let result = score_pair(&board, &scorer, "a-1", "open-2").expect("pair scores");
        assert_eq!(result.total_score, 0.5);
    }
}
