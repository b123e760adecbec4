//! `jobs` and `candidates` commands: ranked matches in either direction.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pds_match_scorer::{DEFAULT_RANK_LIMIT, find_matching_candidates, find_matching_jobs};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::inputs::SharedConfig;
use crate::{
    ARG_AS_OF, ARG_BOARD, ARG_CANDIDATE, ARG_JOB, ARG_LIMIT, ARG_OUTPUT, ARG_WEIGHTS, CliError,
    ENV_CANDIDATES_BOARD, ENV_CANDIDATES_JOB, ENV_JOBS_BOARD, ENV_JOBS_CANDIDATE,
};

/// CLI arguments for the `jobs` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "jobs",
    long_about = "Rank the board's open job postings for one candidate, best \
                 match first. Postings that are closed or past their expiry \
                 are skipped.",
    about = "Rank open jobs for a candidate"
)]
#[ortho_config(prefix = "PDS_MATCH")]
pub(crate) struct JobsArgs {
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
    /// Write the ranking to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Candidate identifier.
    #[arg(long = ARG_CANDIDATE, value_name = "id")]
    #[serde(default)]
    pub(crate) candidate: Option<String>,
    /// Maximum number of matches to print (default 10).
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl JobsArgs {
    pub(crate) fn into_config(self) -> Result<JobsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        JobsConfig::try_from(merged)
    }
}

/// Resolved `jobs` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct JobsConfig {
    pub(crate) shared: SharedConfig,
    pub(crate) candidate: String,
    pub(crate) limit: usize,
}

impl TryFrom<JobsArgs> for JobsConfig {
    type Error = CliError;

    fn try_from(args: JobsArgs) -> Result<Self, Self::Error> {
        let candidate = args.candidate.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATE,
            env: ENV_JOBS_CANDIDATE,
        })?;
        let shared = SharedConfig::resolve(
            args.board,
            ENV_JOBS_BOARD,
            args.weights,
            args.as_of.as_deref(),
            args.output,
        )?;
        Ok(Self {
            shared,
            candidate,
            limit: args.limit.unwrap_or(DEFAULT_RANK_LIMIT),
        })
    }
}

/// CLI arguments for the `candidates` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "candidates",
    long_about = "Rank every candidate on the board for one job posting, best \
                 match first. Candidates whose data sheet has not been parsed \
                 are left out.",
    about = "Rank candidates for a job"
)]
#[ortho_config(prefix = "PDS_MATCH")]
pub(crate) struct CandidatesArgs {
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
    /// Write the ranking to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Job posting identifier.
    #[arg(long = ARG_JOB, value_name = "id")]
    #[serde(default)]
    pub(crate) job: Option<String>,
    /// Maximum number of matches to print (default 10).
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl CandidatesArgs {
    pub(crate) fn into_config(self) -> Result<CandidatesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CandidatesConfig::try_from(merged)
    }
}

/// Resolved `candidates` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CandidatesConfig {
    pub(crate) shared: SharedConfig,
    pub(crate) job: String,
    pub(crate) limit: usize,
}

impl TryFrom<CandidatesArgs> for CandidatesConfig {
    type Error = CliError;

    fn try_from(args: CandidatesArgs) -> Result<Self, Self::Error> {
        let job = args.job.ok_or(CliError::MissingArgument {
            field: ARG_JOB,
            env: ENV_CANDIDATES_JOB,
        })?;
        let shared = SharedConfig::resolve(
            args.board,
            ENV_CANDIDATES_BOARD,
            args.weights,
            args.as_of.as_deref(),
            args.output,
        )?;
        Ok(Self {
            shared,
            job,
            limit: args.limit.unwrap_or(DEFAULT_RANK_LIMIT),
        })
    }
}

pub(crate) fn run_jobs_with(args: JobsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_jobs(&config, writer)
}

pub(crate) fn execute_jobs(config: &JobsConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    config.shared.validate_sources()?;
    let board = config.shared.load_board()?;
    let scorer = config.shared.scorer()?;
    let ranked = find_matching_jobs(
        &board,
        &scorer,
        &config.candidate,
        config.shared.now(),
        config.limit,
    )?;
    config.shared.emit(writer, &ranked)
}

pub(crate) fn run_candidates_with(
    args: CandidatesArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_candidates(&config, writer)
}

pub(crate) fn execute_candidates(
    config: &CandidatesConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    config.shared.validate_sources()?;
    let board = config.shared.load_board()?;
    let scorer = config.shared.scorer()?;
    let ranked = find_matching_candidates(&board, &scorer, &config.job, config.limit)?;
    config.shared.emit(writer, &ranked)
}
