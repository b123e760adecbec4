//! Error taxonomy for scoring and ranking.

use std::fmt;

use thiserror::Error;

use crate::EducationLevelError;

/// Which kind of record a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A job posting.
    Job,
    /// A candidate.
    Candidate,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Job => "job",
            Self::Candidate => "candidate",
        })
    }
}

/// Errors returned by composite scoring, ranking and board queries.
///
/// Component scorers never fail; sparse fields degrade to a zero component
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The candidate has no parsed profile, so no score can be computed.
    #[error("insufficient data to compute a match: candidate {candidate_id} has no parsed profile")]
    DataUnavailable {
        /// Identifier of the candidate lacking a profile.
        candidate_id: String,
    },
    /// A caller-supplied argument was structurally invalid.
    #[error("invalid {argument}: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// A job or candidate identifier did not resolve.
    #[error("{kind} {id} not found")]
    NotFound {
        /// Kind of record looked up.
        kind: RecordKind,
        /// Identifier that failed to resolve.
        id: String,
    },
}

impl MatchError {
    /// Whether the error only reflects one candidate's missing profile.
    #[must_use]
    pub const fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable { .. })
    }
}

impl From<EducationLevelError> for MatchError {
    fn from(source: EducationLevelError) -> Self {
        Self::InvalidArgument {
            argument: "educationLevel",
            reason: source.to_string(),
        }
    }
}
