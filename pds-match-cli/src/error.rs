//! Error types emitted by the `pds-match` CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use pds_match_core::{BoardLoadError, DateParseError, MatchError};
use pds_match_scorer::ConfigError;
use thiserror::Error;

/// Errors emitted by the `pds-match` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The `--as-of` value is not a date.
    #[error("invalid {field}: {source}")]
    InvalidDate {
        field: &'static str,
        #[source]
        source: DateParseError,
    },
    /// Opening the job board file failed.
    #[error("failed to open job board at {path:?}: {source}")]
    OpenBoard {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The job board file is not a valid board document.
    #[error("failed to parse job board at {path:?}: {source}")]
    ParseBoard {
        path: Utf8PathBuf,
        #[source]
        source: BoardLoadError,
    },
    /// Opening the weights file failed.
    #[error("failed to open weights at {path:?}: {source}")]
    OpenWeights {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The weights file is not valid JSON for a match configuration.
    #[error("failed to parse weights at {path:?}: {source}")]
    ParseWeights {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The weights file parsed but failed validation.
    #[error("invalid weights in {path:?}: {source}")]
    InvalidWeights {
        path: Utf8PathBuf,
        #[source]
        source: ConfigError,
    },
    /// Scoring or ranking failed.
    #[error(transparent)]
    Match(#[from] MatchError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// The output file could not be created.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
