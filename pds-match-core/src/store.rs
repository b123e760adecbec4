//! Read access to job postings and candidates.
//!
//! The `JobBoard` trait exposes the two record collections the matcher ranks
//! over. [`MemoryJobBoard`] keeps both in vectors and can be loaded from a
//! JSON document of the form `{ "jobs": [...], "candidates": [...] }`.

use chrono::{DateTime, Utc};

use crate::{Candidate, JobPosting, MatchError, RecordKind};

/// Read-only access to postings and applicants.
///
/// Iteration order is the board's storage order and must be stable between
/// calls; rankings rely on it to break ties deterministically.
///
/// # Examples
///
/// ```rust
/// use pds_match_core::{Candidate, JobBoard, JobPosting, JobRequirement, MemoryJobBoard};
///
/// let board = MemoryJobBoard::new(
///     vec![JobPosting::new("job-1", "Clerk", JobRequirement::default())],
///     vec![Candidate::without_profile("a-1")],
/// );
/// assert_eq!(board.jobs().count(), 1);
/// assert!(board.job("job-1").is_ok());
/// assert!(board.candidate("a-9").is_err());
/// ```
pub trait JobBoard: Send + Sync {
    /// Every posting, regardless of status.
    fn jobs(&self) -> Box<dyn Iterator<Item = &JobPosting> + Send + '_>;

    /// Every candidate, profiled or not.
    fn candidates(&self) -> Box<dyn Iterator<Item = &Candidate> + Send + '_>;

    /// Postings that accept applications at `now`.
    fn open_jobs(&self, now: DateTime<Utc>) -> Box<dyn Iterator<Item = &JobPosting> + Send + '_> {
        Box::new(self.jobs().filter(move |job| job.is_open(now)))
    }

    /// Look up a posting by identifier.
    ///
    /// # Errors
    /// Returns [`MatchError::NotFound`] when no posting carries `id`.
    fn job(&self, id: &str) -> Result<&JobPosting, MatchError> {
        self.jobs()
            .find(|job| job.id == id)
            .ok_or_else(|| MatchError::NotFound {
                kind: RecordKind::Job,
                id: id.to_owned(),
            })
    }

    /// Look up a candidate by identifier.
    ///
    /// # Errors
    /// Returns [`MatchError::NotFound`] when no candidate carries `id`.
    fn candidate(&self, id: &str) -> Result<&Candidate, MatchError> {
        self.candidates()
            .find(|candidate| candidate.id == id)
            .ok_or_else(|| MatchError::NotFound {
                kind: RecordKind::Candidate,
                id: id.to_owned(),
            })
    }
}

/// In-memory [`JobBoard`] backed by two vectors.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MemoryJobBoard {
    jobs: Vec<JobPosting>,
    candidates: Vec<Candidate>,
}

/// Error raised when a board document cannot be decoded.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum BoardLoadError {
    /// The document was not valid board JSON.
    #[error("failed to decode job board: {source}")]
    Decode {
        /// Decoder failure from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

impl MemoryJobBoard {
    /// Create a board from postings and candidates.
    #[must_use]
    pub const fn new(jobs: Vec<JobPosting>, candidates: Vec<Candidate>) -> Self {
        Self { jobs, candidates }
    }

    /// Decode a board from a JSON reader.
    ///
    /// # Errors
    /// Returns [`BoardLoadError::Decode`] when the document is malformed or a
    /// record fails validation, such as an unknown education level.
    #[cfg(feature = "serde")]
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, BoardLoadError> {
        serde_json::from_reader(reader).map_err(|source| BoardLoadError::Decode { source })
    }

    /// Append a posting.
    pub fn push_job(&mut self, job: JobPosting) {
        self.jobs.push(job);
    }

    /// Append a candidate.
    pub fn push_candidate(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }
}

impl JobBoard for MemoryJobBoard {
    fn jobs(&self) -> Box<dyn Iterator<Item = &JobPosting> + Send + '_> {
        Box::new(self.jobs.iter())
    }

    fn candidates(&self) -> Box<dyn Iterator<Item = &Candidate> + Send + '_> {
        Box::new(self.candidates.iter())
    }
}
