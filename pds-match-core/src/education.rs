//! Education levels shared by job postings and personal data sheets.
//!
//! Job postings name a required level from a closed set, while PDS degree
//! text is free-form. [`EducationLevel::from_str`] is strict and rejects
//! unknown labels; [`EducationLevel::degree_ordinal`] is lenient and maps
//! anything unrecognised to ordinal `0`.
//!
//! # Examples
//! ```
//! use pds_match_core::EducationLevel;
//!
//! assert_eq!(EducationLevel::Bachelor.ordinal(), 3);
//! assert_eq!(EducationLevel::HighSchool.to_string(), "High School");
//! assert_eq!(EducationLevel::degree_ordinal("doctorate"), 5);
//! assert_eq!(EducationLevel::degree_ordinal("Vocational"), 0);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Ordered education levels, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EducationLevel {
    /// Secondary school diploma.
    HighSchool,
    /// Two-year associate degree.
    Associate,
    /// Four-year bachelor's degree.
    Bachelor,
    /// Master's degree.
    Master,
    /// Doctoral degree.
    Doctorate,
}

/// Errors returned when parsing an [`EducationLevel`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EducationLevelError {
    /// The label did not name a known level.
    #[error("unknown education level '{raw}'")]
    Unknown {
        /// Label as supplied by the caller.
        raw: String,
    },
}

impl EducationLevel {
    /// Every level in ascending order.
    pub const ALL: [Self; 5] = [
        Self::HighSchool,
        Self::Associate,
        Self::Bachelor,
        Self::Master,
        Self::Doctorate,
    ];

    /// Return the 1-based ordinal used for scoring.
    ///
    /// # Examples
    /// ```
    /// use pds_match_core::EducationLevel;
    ///
    /// assert_eq!(EducationLevel::HighSchool.ordinal(), 1);
    /// assert_eq!(EducationLevel::Doctorate.ordinal(), 5);
    /// ```
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::HighSchool => 1,
            Self::Associate => 2,
            Self::Bachelor => 3,
            Self::Master => 4,
            Self::Doctorate => 5,
        }
    }

    /// Return the canonical label used in job postings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::Associate => "Associate",
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
            Self::Doctorate => "Doctorate",
        }
    }

    /// Map free-form degree text to an ordinal, returning `0` when the text
    /// does not name a known level.
    #[must_use]
    pub fn degree_ordinal(degree: &str) -> u8 {
        Self::from_str(degree).map_or(0, Self::ordinal)
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EducationLevel {
    type Err = EducationLevelError;

    /// Parse a canonical label, ignoring ASCII case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EducationLevelError::Unknown { raw: s.to_owned() })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EducationLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EducationLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
