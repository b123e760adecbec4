//! `score` command: the component breakdown for one candidate/job pair.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pds_match_scorer::score_pair;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::inputs::SharedConfig;
use crate::{
    ARG_AS_OF, ARG_BOARD, ARG_CANDIDATE, ARG_JOB, ARG_OUTPUT, ARG_WEIGHTS, CliError,
    ENV_SCORE_BOARD, ENV_SCORE_CANDIDATE, ENV_SCORE_JOB,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score one candidate against one job posting and print the \
                 total together with the education, experience, skills and \
                 eligibility components.",
    about = "Score one candidate against one job"
)]
#[ortho_config(prefix = "PDS_MATCH")]
pub(crate) struct ScoreArgs {
    /// Path to the JSON job board.
    #[arg(long = ARG_BOARD, value_name = "path")]
    #[serde(default)]
    pub(crate) board: Option<Utf8PathBuf>,
    /// Path to a JSON match configuration overriding the default weights.
    #[arg(long = ARG_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Reference date for ongoing positions (YYYY-MM-DD).
    #[arg(long = ARG_AS_OF, value_name = "date")]
    #[serde(default)]
    pub(crate) as_of: Option<String>,
    /// Write the result to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Candidate identifier.
    #[arg(long = ARG_CANDIDATE, value_name = "id")]
    #[serde(default)]
    pub(crate) candidate: Option<String>,
    /// Job posting identifier.
    #[arg(long = ARG_JOB, value_name = "id")]
    #[serde(default)]
    pub(crate) job: Option<String>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) shared: SharedConfig,
    pub(crate) candidate: String,
    pub(crate) job: String,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let candidate = args.candidate.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATE,
            env: ENV_SCORE_CANDIDATE,
        })?;
        let job = args.job.ok_or(CliError::MissingArgument {
            field: ARG_JOB,
            env: ENV_SCORE_JOB,
        })?;
        let shared = SharedConfig::resolve(
            args.board,
            ENV_SCORE_BOARD,
            args.weights,
            args.as_of.as_deref(),
            args.output,
        )?;
        Ok(Self {
            shared,
            candidate,
            job,
        })
    }
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_score(&config, writer)
}

pub(crate) fn execute_score(config: &ScoreConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    config.shared.validate_sources()?;
    let board = config.shared.load_board()?;
    let scorer = config.shared.scorer()?;
    let result = score_pair(&board, &scorer, &config.candidate, &config.job)?;
    config.shared.emit(writer, &result)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
