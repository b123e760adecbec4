//! Job recommendations: the best open jobs above a score threshold.
//!
//! Recommendations reuse [`find_matching_jobs`](crate::find_matching_jobs)
//! with a wider pool, then keep only matches at or above the threshold.
//! Delivering them (email, notifications) is left to the host.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use pds_match_core::{Candidate, JobBoard, MatchError, Scorer};

use crate::{ConfigError, JobMatch, rank_jobs_for_candidate};

/// Thresholds controlling which matches become recommendations.
///
/// Deserialising validates the values the same way as
/// [`RecommendationSettings::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "RawSettings")
)]
pub struct RecommendationSettings {
    /// Minimum total score a match needs.
    pub threshold: f64,
    /// Most recommendations returned per candidate.
    pub max_recommendations: usize,
    /// Number of ranked jobs considered before thresholding.
    pub pool_size: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            threshold: 0.7,
            max_recommendations: 5,
            pool_size: 20,
        }
    }
}

/// Unchecked settings as they arrive from configuration files.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSettings {
    threshold: f64,
    max_recommendations: usize,
    pool_size: usize,
}

#[cfg(feature = "serde")]
impl Default for RawSettings {
    fn default() -> Self {
        let defaults = RecommendationSettings::default();
        Self {
            threshold: defaults.threshold,
            max_recommendations: defaults.max_recommendations,
            pool_size: defaults.pool_size,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawSettings> for RecommendationSettings {
    type Error = ConfigError;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        Self::new(raw.threshold, raw.max_recommendations, raw.pool_size)
    }
}

fn check_threshold(value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::ThresholdOutOfRange { value })
    }
}

fn check_count(setting: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        Err(ConfigError::ZeroCount { setting })
    } else {
        Ok(value)
    }
}

/// Partial change to [`RecommendationSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct SettingsUpdate {
    /// New threshold, accepted when within `0.0..=1.0`.
    pub threshold: Option<f64>,
    /// New cap, accepted when at least one.
    pub max_recommendations: Option<usize>,
    /// New pool size, accepted when at least one.
    pub pool_size: Option<usize>,
}

impl RecommendationSettings {
    /// Build validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ThresholdOutOfRange`] when `threshold` is NaN or
    /// outside `0.0..=1.0`, and [`ConfigError::ZeroCount`] when either count
    /// is zero.
    ///
    /// # Examples
    /// ```
    /// use pds_match_scorer::{ConfigError, RecommendationSettings};
    ///
    /// assert!(RecommendationSettings::new(0.8, 3, 10).is_ok());
    /// assert_eq!(
    ///     RecommendationSettings::new(0.8, 3, 0),
    ///     Err(ConfigError::ZeroCount { setting: "poolSize" }),
    /// );
    /// ```
    pub fn new(
        threshold: f64,
        max_recommendations: usize,
        pool_size: usize,
    ) -> Result<Self, ConfigError> {
        Self {
            threshold,
            max_recommendations,
            pool_size,
        }
        .validate()
    }

    /// Check settings assembled field by field.
    ///
    /// # Errors
    ///
    /// See [`RecommendationSettings::new`].
    pub fn validate(self) -> Result<Self, ConfigError> {
        check_threshold(self.threshold)?;
        check_count("maxRecommendations", self.max_recommendations)?;
        check_count("poolSize", self.pool_size)?;
        Ok(self)
    }

    /// Apply the provided, valid values of `update`; invalid values are
    /// logged and ignored.
    ///
    /// # Examples
    /// ```
    /// use pds_match_scorer::{RecommendationSettings, SettingsUpdate};
    ///
    /// let mut settings = RecommendationSettings::default();
    /// settings.update(SettingsUpdate {
    ///     threshold: Some(0.8),
    ///     max_recommendations: Some(0),
    ///     ..SettingsUpdate::default()
    /// });
    /// assert_eq!(settings.threshold, 0.8);
    /// assert_eq!(settings.max_recommendations, 5);
    /// ```
    pub fn update(&mut self, update: SettingsUpdate) {
        if let Some(threshold) = update.threshold {
            match check_threshold(threshold) {
                Ok(value) => self.threshold = value,
                Err(err) => warn!("ignoring recommendation setting: {err}"),
            }
        }
        if let Some(max) = update.max_recommendations {
            match check_count("maxRecommendations", max) {
                Ok(value) => self.max_recommendations = value,
                Err(err) => warn!("ignoring recommendation setting: {err}"),
            }
        }
        if let Some(pool) = update.pool_size {
            match check_count("poolSize", pool) {
                Ok(value) => self.pool_size = value,
                Err(err) => warn!("ignoring recommendation setting: {err}"),
            }
        }
    }
}

/// Recommendations for one candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Recommendation<'a> {
    /// Candidate the jobs are recommended to.
    pub candidate: &'a Candidate,
    /// Recommended jobs, best first.
    pub jobs: Vec<JobMatch<'a>>,
}

/// Recommend open jobs to one candidate.
///
/// # Errors
/// Returns [`MatchError::NotFound`] for an unknown candidate,
/// [`MatchError::DataUnavailable`] when that candidate has no parsed
/// profile, and [`MatchError::InvalidArgument`] when `pool_size` is zero.
pub fn recommend_jobs<'a, B, S>(
    board: &'a B,
    scorer: &S,
    candidate_id: &str,
    now: DateTime<Utc>,
    settings: &RecommendationSettings,
) -> Result<Vec<JobMatch<'a>>, MatchError>
where
    B: JobBoard + ?Sized,
    S: Scorer + ?Sized,
{
    let matches = crate::find_matching_jobs(board, scorer, candidate_id, now, settings.pool_size)?;
    Ok(select(matches, settings))
}

/// Recommend open jobs to every profiled candidate on the board.
///
/// Candidates with no qualifying jobs are omitted.
///
/// # Errors
/// Returns [`MatchError::InvalidArgument`] when `pool_size` is zero.
pub fn recommend_for_all<'a, B, S>(
    board: &'a B,
    scorer: &S,
    now: DateTime<Utc>,
    settings: &RecommendationSettings,
) -> Result<Vec<Recommendation<'a>>, MatchError>
where
    B: JobBoard + ?Sized,
    S: Scorer + ?Sized,
{
    let mut recommendations = Vec::new();
    for candidate in board.candidates().filter(|c| c.profile().is_some()) {
        let matches =
            rank_jobs_for_candidate(scorer, candidate, board.open_jobs(now), settings.pool_size)?;
        let jobs = select(matches, settings);
        debug!(
            "candidate {} has {} job recommendation(s)",
            candidate.id,
            jobs.len()
        );
        if !jobs.is_empty() {
            recommendations.push(Recommendation { candidate, jobs });
        }
    }
    Ok(recommendations)
}

fn select<'a>(
    matches: Vec<JobMatch<'a>>,
    settings: &RecommendationSettings,
) -> Vec<JobMatch<'a>> {
    matches
        .into_iter()
        .filter(|m| m.match_score >= settings.threshold)
        .take(settings.max_recommendations)
        .collect()
}
