//! `recommend` command: open jobs above the recommendation threshold.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pds_match_core::JobBoard;
use pds_match_scorer::{
    Recommendation, RecommendationSettings, SettingsUpdate, recommend_for_all, recommend_jobs,
};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::inputs::SharedConfig;
use crate::{
    ARG_AS_OF, ARG_BOARD, ARG_CANDIDATE, ARG_MAX_RECOMMENDATIONS, ARG_OUTPUT, ARG_POOL_SIZE,
    ARG_THRESHOLD, ARG_WEIGHTS, CliError, ENV_RECOMMEND_BOARD,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Recommend open jobs whose match score reaches the threshold. \
                 Without --candidate every candidate with a parsed data sheet \
                 is considered and only non-empty recommendation lists are \
                 printed.",
    about = "Recommend open jobs to one or every candidate"
)]
#[ortho_config(prefix = "PDS_MATCH")]
pub(crate) struct RecommendArgs {
    /// Path to the JSON job board.
    #[arg(long = ARG_BOARD, value_name = "path")]
    #[serde(default)]
    pub(crate) board: Option<Utf8PathBuf>,
    /// Path to a JSON match configuration overriding the default weights.
    #[arg(long = ARG_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Reference date for ongoing positions and job expiry (YYYY-MM-DD).
    #[arg(long = ARG_AS_OF, value_name = "date")]
    #[serde(default)]
    pub(crate) as_of: Option<String>,
    /// Write the recommendations to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Restrict recommendations to one candidate.
    #[arg(long = ARG_CANDIDATE, value_name = "id")]
    #[serde(default)]
    pub(crate) candidate: Option<String>,
    /// Minimum total score (default 0.7).
    #[arg(long = ARG_THRESHOLD, value_name = "score")]
    #[serde(default)]
    pub(crate) threshold: Option<f64>,
    /// Most recommendations per candidate (default 5).
    #[arg(long = ARG_MAX_RECOMMENDATIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_recommendations: Option<usize>,
    /// Ranked jobs considered before thresholding (default 20).
    #[arg(long = ARG_POOL_SIZE, value_name = "count")]
    #[serde(default)]
    pub(crate) pool_size: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) shared: SharedConfig,
    pub(crate) candidate: Option<String>,
    pub(crate) settings: RecommendationSettings,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let shared = SharedConfig::resolve(
            args.board,
            ENV_RECOMMEND_BOARD,
            args.weights,
            args.as_of.as_deref(),
            args.output,
        )?;
        let mut settings = RecommendationSettings::default();
        settings.update(SettingsUpdate {
            threshold: args.threshold,
            max_recommendations: args.max_recommendations,
            pool_size: args.pool_size,
        });
        Ok(Self {
            shared,
            candidate: args.candidate,
            settings,
        })
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_recommend(&config, writer)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    config.shared.validate_sources()?;
    let board = config.shared.load_board()?;
    let scorer = config.shared.scorer()?;
    let now = config.shared.now();
    let recommendations = match &config.candidate {
        Some(candidate_id) => {
            let jobs = recommend_jobs(&board, &scorer, candidate_id, now, &config.settings)?;
            let candidate = board.candidate(candidate_id)?;
            vec![Recommendation { candidate, jobs }]
        }
        None => recommend_for_all(&board, &scorer, now, &config.settings)?,
    };
    config.shared.emit(writer, &recommendations)
}
