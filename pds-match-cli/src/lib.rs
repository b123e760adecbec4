//! Command-line interface for querying a PDS job board.
//!
//! Every subcommand reads a JSON board file (`{ "jobs": [...],
//! "candidates": [...] }`), scores with the default or a supplied
//! `MatchConfig`, and prints pretty JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use std::io::Write;

mod error;
mod fs;
mod inputs;
mod rank;
mod recommend;
mod score;

pub use error::CliError;

use rank::{CandidatesArgs, JobsArgs, run_candidates_with, run_jobs_with};
use recommend::{RecommendArgs, run_recommend_with};
use score::{ScoreArgs, run_score_with};

pub(crate) const ARG_BOARD: &str = "board";
pub(crate) const ARG_WEIGHTS: &str = "weights";
pub(crate) const ARG_AS_OF: &str = "as-of";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_CANDIDATE: &str = "candidate";
pub(crate) const ARG_JOB: &str = "job";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_THRESHOLD: &str = "threshold";
pub(crate) const ARG_MAX_RECOMMENDATIONS: &str = "max-recommendations";
pub(crate) const ARG_POOL_SIZE: &str = "pool-size";

pub(crate) const ENV_SCORE_BOARD: &str = "PDS_MATCH_CMDS_SCORE_BOARD";
pub(crate) const ENV_SCORE_CANDIDATE: &str = "PDS_MATCH_CMDS_SCORE_CANDIDATE";
pub(crate) const ENV_SCORE_JOB: &str = "PDS_MATCH_CMDS_SCORE_JOB";
pub(crate) const ENV_JOBS_BOARD: &str = "PDS_MATCH_CMDS_JOBS_BOARD";
pub(crate) const ENV_JOBS_CANDIDATE: &str = "PDS_MATCH_CMDS_JOBS_CANDIDATE";
pub(crate) const ENV_CANDIDATES_BOARD: &str = "PDS_MATCH_CMDS_CANDIDATES_BOARD";
pub(crate) const ENV_CANDIDATES_JOB: &str = "PDS_MATCH_CMDS_CANDIDATES_JOB";
pub(crate) const ENV_RECOMMEND_BOARD: &str = "PDS_MATCH_CMDS_RECOMMEND_BOARD";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, loading or
/// scoring fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Score(args) => run_score_with(args, writer),
        Command::Jobs(args) => run_jobs_with(args, writer),
        Command::Candidates(args) => run_candidates_with(args, writer),
        Command::Recommend(args) => run_recommend_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pds-match",
    about = "Match applicants to job postings using their parsed data sheets",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one candidate against one job.
    Score(ScoreArgs),
    /// Rank open jobs for a candidate.
    Jobs(JobsArgs),
    /// Rank candidates for a job.
    Candidates(CandidatesArgs),
    /// Recommend open jobs to one or every candidate.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
