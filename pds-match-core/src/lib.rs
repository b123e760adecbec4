//! Core domain types for the PDS job matcher.
//!
//! Candidates carry structured data parsed from their personal data sheet
//! (PDS); job postings carry the requirements those candidates are scored
//! against. The [`Scorer`] trait connects the two, and [`JobBoard`]
//! provides the collections that rankings iterate over.
#![forbid(unsafe_code)]

pub mod candidate;
pub mod date;
pub mod education;
pub mod error;
pub mod job;
pub mod result;
pub mod scorer;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use candidate::{Candidate, CandidateProfile, EducationEntry, WorkExperience};
pub use date::{DAYS_PER_YEAR, DateParseError, parse_date, years_between};
pub use education::{EducationLevel, EducationLevelError};
pub use error::{MatchError, RecordKind};
pub use job::{JobPosting, JobRequirement, JobStatus};
pub use result::MatchResult;
pub use scorer::{Scorer, require_profile};
#[cfg(feature = "serde")]
pub use store::BoardLoadError;
pub use store::{JobBoard, MemoryJobBoard};
