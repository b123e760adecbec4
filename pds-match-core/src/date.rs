//! Calendar helpers for work-history durations.
//!
//! PDS records carry dates either as plain `YYYY-MM-DD` strings or as full
//! RFC 3339 timestamps exported from the document store. Both forms are
//! reduced to a [`NaiveDate`]; time-of-day is discarded.

use chrono::{DateTime, NaiveDate};
use thiserror::Error;

/// Average number of days per year, accounting for leap years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Errors returned by [`parse_date`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// The text was neither a calendar date nor an RFC 3339 timestamp.
    #[error("'{raw}' is not a YYYY-MM-DD date or RFC 3339 timestamp")]
    Unrecognised {
        /// Text as supplied.
        raw: String,
    },
}

/// Parse a calendar date or RFC 3339 timestamp into a [`NaiveDate`].
///
/// # Errors
/// Returns [`DateParseError::Unrecognised`] when neither format matches.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pds_match_core::date::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2019, 6, 1);
/// assert_eq!(parse_date("2019-06-01").ok(), expected);
/// assert_eq!(parse_date("2019-06-01T08:30:00.000Z").ok(), expected);
/// ```
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| DateParseError::Unrecognised {
            raw: raw.to_owned(),
        })
}

/// Number of years between two dates, using [`DAYS_PER_YEAR`].
///
/// The result is negative when `end` precedes `start`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pds_match_core::date::years_between;
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// assert!((years_between(start, end) - 366.0 / 365.25).abs() < 1e-12);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "day counts are converted to fractional years"
)]
pub fn years_between(start: NaiveDate, end: NaiveDate) -> f64 {
    let days = end.signed_duration_since(start).num_days();
    days as f64 / DAYS_PER_YEAR
}

/// Serde adapters accepting either date representation.
#[cfg(feature = "serde")]
pub(crate) mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub(crate) fn serialize<S: Serializer>(
        date: &NaiveDate,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }

    /// Optional variant; `null`, absence and blank strings map to `None`.
    pub(crate) mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        pub(crate) fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            match raw.as_deref().map(str::trim) {
                None | Some("") => Ok(None),
                Some(text) => crate::date::parse_date(text)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
            }
        }
    }
}
