//! Inputs shared by every subcommand: the board, weights, reference date and
//! output destination.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use log::debug;
use pds_match_core::{MemoryJobBoard, parse_date};
use pds_match_scorer::{MatchConfig, WeightedMatchScorer};
use serde::Serialize;
use std::io::{BufReader, Write};

use crate::fs::{create_utf8_file, file_is_file, open_utf8_file};
use crate::{ARG_AS_OF, ARG_BOARD, ARG_WEIGHTS, CliError};

/// Resolved shared configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SharedConfig {
    /// JSON job board file.
    pub(crate) board: Utf8PathBuf,
    /// Optional JSON `MatchConfig` file.
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Reference date; today when absent.
    pub(crate) as_of: Option<NaiveDate>,
    /// Output file; the caller's writer when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SharedConfig {
    /// Build the shared configuration from merged argument values.
    pub(crate) fn resolve(
        board: Option<Utf8PathBuf>,
        board_env: &'static str,
        weights: Option<Utf8PathBuf>,
        as_of: Option<&str>,
        output: Option<Utf8PathBuf>,
    ) -> Result<Self, CliError> {
        let board = board.ok_or(CliError::MissingArgument {
            field: ARG_BOARD,
            env: board_env,
        })?;
        let as_of = as_of
            .map(parse_date)
            .transpose()
            .map_err(|source| CliError::InvalidDate {
                field: ARG_AS_OF,
                source,
            })?;
        Ok(Self {
            board,
            weights,
            as_of,
            output,
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.board, ARG_BOARD)?;
        if let Some(weights) = &self.weights {
            require_existing(weights, ARG_WEIGHTS)?;
        }
        Ok(())
    }

    /// Read the job board file.
    pub(crate) fn load_board(&self) -> Result<MemoryJobBoard, CliError> {
        let file = open_utf8_file(&self.board).map_err(|source| CliError::OpenBoard {
            path: self.board.clone(),
            source,
        })?;
        let board = MemoryJobBoard::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseBoard {
                path: self.board.clone(),
                source,
            }
        })?;
        debug!("loaded job board from {}", self.board);
        Ok(board)
    }

    /// Build the scorer from the weights file (or defaults) and reference date.
    pub(crate) fn scorer(&self) -> Result<WeightedMatchScorer, CliError> {
        let scorer = match &self.weights {
            Some(path) => {
                let config = load_match_config(path)?;
                WeightedMatchScorer::new(config).map_err(|source| CliError::InvalidWeights {
                    path: path.clone(),
                    source,
                })?
            }
            None => WeightedMatchScorer::with_defaults(),
        };
        Ok(match self.as_of {
            Some(date) => scorer.with_reference_date(date),
            None => scorer,
        })
    }

    /// Instant used to decide which postings are open.
    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.as_of
            .map_or_else(Utc::now, |date| date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Write `value` as pretty JSON to the output file, or to `writer`.
    pub(crate) fn emit<T: Serialize + ?Sized>(
        &self,
        writer: &mut dyn Write,
        value: &T,
    ) -> Result<(), CliError> {
        let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
        match &self.output {
            Some(path) => {
                let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
                write_payload(&mut file, &payload)?;
                debug!("wrote output to {path}");
                Ok(())
            }
            None => write_payload(writer, &payload),
        }
    }
}

fn write_payload(writer: &mut dyn Write, payload: &str) -> Result<(), CliError> {
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a JSON-encoded [`MatchConfig`] from disk.
pub(crate) fn load_match_config(path: &Utf8Path) -> Result<MatchConfig, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenWeights {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseWeights {
        path: path.to_path_buf(),
        source,
    })
}
