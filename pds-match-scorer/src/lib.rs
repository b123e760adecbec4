//! Scoring and ranking for the PDS job matcher.
//!
//! The crate provides three layers:
//! - **Component scores** ([`components`]) compare one dimension of a
//!   candidate profile (education, experience, skills, eligibility) with a
//!   job requirement, returning a value in `0.0..=1.0`.
//! - **The composite scorer** ([`WeightedMatchScorer`]) combines the
//!   components with validated [`MatchWeights`] and rounds the total to two
//!   decimal places. It implements the
//!   [`Scorer`](pds_match_core::Scorer) trait.
//! - **Rankings and recommendations** ([`rank_jobs_for_candidate`],
//!   [`find_matching_jobs`], [`recommend_jobs`], ...) score every pair, sort
//!   best first and truncate.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use pds_match_core::{
//!     Candidate, CandidateProfile, JobPosting, JobRequirement, MemoryJobBoard,
//! };
//! use pds_match_scorer::{DEFAULT_RANK_LIMIT, WeightedMatchScorer, find_matching_candidates};
//!
//! let board = MemoryJobBoard::new(
//!     vec![JobPosting::new("job-1", "Encoder", JobRequirement {
//!         skills: vec!["typing".into()],
//!         ..JobRequirement::default()
//!     })],
//!     vec![
//!         Candidate::new("a-1", CandidateProfile {
//!             skills: vec!["Typing".into()],
//!             ..CandidateProfile::default()
//!         }),
//!         Candidate::without_profile("a-2"),
//!     ],
//! );
//! let scorer = WeightedMatchScorer::with_defaults();
//! let ranked = find_matching_candidates(&board, &scorer, "job-1", DEFAULT_RANK_LIMIT)
//!     .expect("job exists");
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].match_score, 0.3);
//! ```

#![forbid(unsafe_code)]

mod board;
pub mod components;
mod config;
mod matcher;
pub mod normalize;
mod rank;
mod recommend;

pub use board::{find_matching_candidates, find_matching_jobs, score_pair};
pub use config::{ConfigError, MatchConfig, MatchWeights, ScoreTiers, WEIGHT_SUM_TOLERANCE};
pub use matcher::WeightedMatchScorer;
pub use rank::{
    CandidateMatch, DEFAULT_RANK_LIMIT, JobMatch, rank_candidates_for_job, rank_jobs_for_candidate,
};
pub use recommend::{
    Recommendation, RecommendationSettings, SettingsUpdate, recommend_for_all, recommend_jobs,
};
