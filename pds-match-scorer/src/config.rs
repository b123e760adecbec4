//! Tunable weights and tier constants for the composite scorer.

use thiserror::Error;

/// Largest accepted deviation of the weight total from `1.0`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Errors raised when validating scorer configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A weight was NaN or infinite.
    #[error("{component} weight must be finite")]
    NonFiniteWeight {
        /// Component whose weight was rejected.
        component: &'static str,
    },
    /// A weight was below zero.
    #[error("{component} weight must be non-negative, got {value}")]
    NegativeWeight {
        /// Component whose weight was rejected.
        component: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The weights did not sum to one.
    #[error("weights must sum to 1.0, got {sum}")]
    WeightSum {
        /// Observed total.
        sum: f64,
    },
    /// A tier constant fell outside `0.0..=1.0`.
    #[error("{tier} must lie between 0.0 and 1.0, got {value}")]
    TierOutOfRange {
        /// Name of the offending tier constant.
        tier: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The recommendation threshold fell outside `0.0..=1.0`.
    #[error("recommendation threshold must lie between 0.0 and 1.0, got {value}")]
    ThresholdOutOfRange {
        /// Rejected value.
        value: f64,
    },
    /// A recommendation count was zero.
    #[error("{setting} must be at least 1")]
    ZeroCount {
        /// Name of the offending setting.
        setting: &'static str,
    },
}

/// Relative weight of each score component.
///
/// # Examples
/// ```
/// use pds_match_scorer::MatchWeights;
///
/// let weights = MatchWeights::default().validate().expect("defaults are valid");
/// assert_eq!(weights.skills, 0.3);
///
/// let skewed = MatchWeights { education: 0.9, ..MatchWeights::default() };
/// assert!(skewed.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct MatchWeights {
    /// Weight of the education component.
    pub education: f64,
    /// Weight of the experience component.
    pub experience: f64,
    /// Weight of the skills component.
    pub skills: f64,
    /// Weight of the eligibility component.
    pub eligibility: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            education: 0.2,
            experience: 0.3,
            skills: 0.3,
            eligibility: 0.2,
        }
    }
}

impl MatchWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a weight is non-finite or negative, or
    /// when the total strays from `1.0` by more than
    /// [`WEIGHT_SUM_TOLERANCE`].
    #[expect(
        clippy::float_arithmetic,
        reason = "the weight total is compared against one within a tolerance"
    )]
    pub fn validate(self) -> Result<Self, ConfigError> {
        for (component, value) in self.named() {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteWeight { component });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeWeight { component, value });
            }
        }
        let sum = self.total();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum { sum });
        }
        Ok(self)
    }

    /// Sum of all four weights.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums the component weights"
    )]
    pub fn total(self) -> f64 {
        self.education + self.experience + self.skills + self.eligibility
    }

    /// Weighted sum of components in `education, experience, skills,
    /// eligibility` order.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "composite score is a weighted sum"
    )]
    pub fn combine(self, components: [f64; 4]) -> f64 {
        let [education, experience, skills, eligibility] = components;
        self.education * education
            + self.experience * experience
            + self.skills * skills
            + self.eligibility * eligibility
    }

    const fn named(self) -> [(&'static str, f64); 4] {
        [
            ("education", self.education),
            ("experience", self.experience),
            ("skills", self.skills),
            ("eligibility", self.eligibility),
        ]
    }
}

/// Partial-credit constants used by the education and experience scores.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ScoreTiers {
    /// Credit when the highest degree is one level below the requirement.
    pub education_one_below: f64,
    /// Credit when the highest degree is further below the requirement.
    pub education_floor: f64,
    /// Credit when experience reaches the minimum but not the maximum.
    pub experience_within_range: f64,
    /// Lowest credit granted for experience below the minimum.
    pub experience_floor: f64,
}

impl Default for ScoreTiers {
    fn default() -> Self {
        Self {
            education_one_below: 0.7,
            education_floor: 0.3,
            experience_within_range: 0.8,
            experience_floor: 0.3,
        }
    }
}

impl ScoreTiers {
    /// Validate the tier constants and return a copy.
    ///
    /// # Errors
    /// Returns [`ConfigError::TierOutOfRange`] for any value that is not a
    /// finite number in `0.0..=1.0`.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let tiers = [
            ("educationOneBelow", self.education_one_below),
            ("educationFloor", self.education_floor),
            ("experienceWithinRange", self.experience_within_range),
            ("experienceFloor", self.experience_floor),
        ];
        match tiers
            .into_iter()
            .find(|(_, value)| !(0.0..=1.0).contains(value))
        {
            Some((tier, value)) => Err(ConfigError::TierOutOfRange { tier, value }),
            None => Ok(self),
        }
    }
}

/// Complete scorer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct MatchConfig {
    /// Component weights.
    pub weights: MatchWeights,
    /// Partial-credit tiers.
    pub tiers: ScoreTiers,
}

impl MatchConfig {
    /// Validate and bundle weights and tiers.
    ///
    /// # Errors
    /// Propagates failures from [`MatchWeights::validate`] and
    /// [`ScoreTiers::validate`].
    pub fn new(weights: MatchWeights, tiers: ScoreTiers) -> Result<Self, ConfigError> {
        Ok(Self {
            weights: weights.validate()?,
            tiers: tiers.validate()?,
        })
    }

    /// Re-validate a configuration built field by field, e.g. after
    /// deserialisation.
    ///
    /// # Errors
    /// See [`MatchConfig::new`].
    pub fn validate(self) -> Result<Self, ConfigError> {
        Self::new(self.weights, self.tiers)
    }
}
