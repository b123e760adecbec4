//! Facade crate for the PDS job matcher.
//!
//! This crate re-exports the domain types from `pds-match-core` together with
//! the scorer, ranking and recommendation entry points from
//! `pds-match-scorer`.

#![forbid(unsafe_code)]

pub use pds_match_core::{
    Candidate, CandidateProfile, EducationEntry, EducationLevel, EducationLevelError, JobBoard,
    JobPosting, JobRequirement, JobStatus, MatchError, MatchResult, MemoryJobBoard, RecordKind,
    Scorer, WorkExperience,
};

#[cfg(feature = "serde")]
pub use pds_match_core::BoardLoadError;

pub use pds_match_scorer::{
    CandidateMatch, ConfigError, DEFAULT_RANK_LIMIT, JobMatch, MatchConfig, MatchWeights,
    Recommendation, RecommendationSettings, ScoreTiers, SettingsUpdate, WeightedMatchScorer,
    find_matching_candidates, find_matching_jobs, rank_candidates_for_job,
    rank_jobs_for_candidate, recommend_for_all, recommend_jobs, score_pair,
};
