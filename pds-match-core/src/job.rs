//! Job postings and the requirements candidates are scored against.

use chrono::{DateTime, Utc};

use crate::EducationLevel;

/// Qualifications a job asks for. Every field is optional; scorers treat a
/// missing requirement as contributing nothing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct JobRequirement {
    /// Minimum education level.
    pub education_level: Option<EducationLevel>,
    /// Lower bound of the desired experience, in years.
    pub experience_years_min: Option<f64>,
    /// Upper bound of the desired experience, in years.
    pub experience_years_max: Option<f64>,
    /// Required skills, matched case-insensitively.
    pub skills: Vec<String>,
    /// Required licences or eligibilities, matched case-insensitively.
    pub eligibility: Vec<String>,
}

/// Lifecycle state of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum JobStatus {
    /// Not yet published.
    #[default]
    Draft,
    /// Published and accepting applications.
    Active,
    /// Temporarily hidden.
    Paused,
    /// No longer accepting applications.
    Closed,
    /// Retained for records only.
    Archived,
}

/// A published job together with its requirements.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use pds_match_core::{JobPosting, JobRequirement, JobStatus};
///
/// let now = Utc::now();
/// let job = JobPosting::new("job-1", "Records Officer", JobRequirement::default())
///     .with_expiry(now + Duration::days(30));
/// assert_eq!(job.status, JobStatus::Active);
/// assert!(job.is_open(now));
/// assert!(!job.clone().with_status(JobStatus::Closed).is_open(now));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct JobPosting {
    /// Stable posting identifier.
    pub id: String,
    /// Human-readable title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Lifecycle state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: JobStatus,
    /// Instant after which the posting is no longer open.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub expiry_date: Option<DateTime<Utc>>,
    /// Qualifications asked of applicants.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub requirement: JobRequirement,
}

impl JobPosting {
    /// Construct an active posting without an expiry.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, requirement: JobRequirement) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: JobStatus::Active,
            expiry_date: None,
            requirement,
        }
    }

    /// Replace the lifecycle state while returning `self` for chaining.
    #[must_use]
    pub const fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the expiry instant while returning `self` for chaining.
    #[must_use]
    pub const fn with_expiry(mut self, expiry_date: DateTime<Utc>) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    /// Whether the posting accepts applications at `now`: it must be active
    /// and, when an expiry is set, expire strictly after `now`.
    #[must_use]
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.status == JobStatus::Active && self.expiry_date.is_none_or(|expiry| expiry > now)
    }
}
