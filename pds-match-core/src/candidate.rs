//! Candidates and the profile data extracted from their personal data sheet.
//!
//! A [`Candidate`] without a [`CandidateProfile`] is one whose PDS has not
//! been parsed yet. Scorers must report that case as unavailable data rather
//! than as a zero score.

use chrono::NaiveDate;

use crate::date::years_between;

/// One row of a candidate's educational background.
///
/// Only `degree` takes part in scoring; the remaining fields are carried
/// through for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct EducationEntry {
    /// Free-form degree label, e.g. `"Bachelor"`.
    pub degree: String,
    /// Name of the school attended.
    pub school_name: String,
    /// Attendance start, as written on the PDS.
    pub from: Option<String>,
    /// Attendance end, as written on the PDS.
    pub to: Option<String>,
    /// Graduation year, as written on the PDS.
    pub year_graduated: Option<String>,
    /// Academic honours received.
    pub honors: Option<String>,
}

impl EducationEntry {
    /// Construct an entry carrying only a degree label.
    ///
    /// # Examples
    /// ```
    /// use pds_match_core::EducationEntry;
    ///
    /// let entry = EducationEntry::with_degree("Master");
    /// assert_eq!(entry.degree, "Master");
    /// assert!(entry.school_name.is_empty());
    /// ```
    #[must_use]
    pub fn with_degree(degree: impl Into<String>) -> Self {
        Self {
            degree: degree.into(),
            ..Self::default()
        }
    }
}

/// One position in a candidate's work history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct WorkExperience {
    /// Job title held.
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: String,
    /// Employer name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub company: String,
    /// First day in the position.
    #[cfg_attr(feature = "serde", serde(with = "crate::date::serde_date"))]
    pub start_date: NaiveDate,
    /// Last day in the position; absent while the position is current.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "crate::date::serde_date::option",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub end_date: Option<NaiveDate>,
    /// Whether the candidate still holds the position.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_current_position: bool,
}

impl WorkExperience {
    /// A finished position spanning `start_date..end_date`.
    #[must_use]
    pub fn ended(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            position: String::new(),
            company: String::new(),
            start_date,
            end_date: Some(end_date),
            is_current_position: false,
        }
    }

    /// A position the candidate still holds.
    #[must_use]
    pub fn current(start_date: NaiveDate) -> Self {
        Self {
            position: String::new(),
            company: String::new(),
            start_date,
            end_date: None,
            is_current_position: true,
        }
    }

    /// Last day counted towards experience.
    ///
    /// Current positions run until `today`; finished positions end on their
    /// recorded end date, or yield `None` when it is missing.
    #[must_use]
    pub fn effective_end(&self, today: NaiveDate) -> Option<NaiveDate> {
        if self.is_current_position {
            Some(today)
        } else {
            self.end_date
        }
    }

    /// Years spent in the position as of `today`.
    ///
    /// Entries without a usable end date, or whose end precedes the start,
    /// contribute nothing.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use pds_match_core::WorkExperience;
    ///
    /// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    /// assert_eq!(WorkExperience::ended(start, end).years_served(end), 0.0);
    /// ```
    #[must_use]
    pub fn years_served(&self, today: NaiveDate) -> f64 {
        self.effective_end(today)
            .map_or(0.0, |end| years_between(self.start_date, end).max(0.0))
    }
}

/// Structured data extracted from a candidate's personal data sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct CandidateProfile {
    /// Educational background, in no particular order.
    pub education: Vec<EducationEntry>,
    /// Work history, in no particular order.
    pub work_experience: Vec<WorkExperience>,
    /// Free-text skills.
    pub skills: Vec<String>,
    /// Free-text licences and civil-service eligibilities.
    pub eligibility: Vec<String>,
}

/// A job applicant, optionally carrying a parsed profile.
///
/// # Examples
/// ```
/// use pds_match_core::{Candidate, CandidateProfile};
///
/// let parsed = Candidate::new("a-1", CandidateProfile::default());
/// assert!(parsed.profile().is_some());
///
/// let pending = Candidate::without_profile("a-2");
/// assert!(pending.profile().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Candidate {
    /// Stable applicant identifier.
    pub id: String,
    /// Parsed PDS data; `None` until extraction completes.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "parsedData", skip_serializing_if = "Option::is_none")
    )]
    pub profile: Option<CandidateProfile>,
}

impl Candidate {
    /// Construct a candidate with a parsed profile.
    #[must_use]
    pub fn new(id: impl Into<String>, profile: CandidateProfile) -> Self {
        Self {
            id: id.into(),
            profile: Some(profile),
        }
    }

    /// Construct a candidate whose PDS has not been parsed.
    #[must_use]
    pub fn without_profile(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            profile: None,
        }
    }

    /// Borrow the parsed profile, if present.
    #[must_use]
    pub const fn profile(&self) -> Option<&CandidateProfile> {
        self.profile.as_ref()
    }
}
