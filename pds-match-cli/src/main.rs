//! Entry point for the `pds-match` command-line interface.
#![forbid(unsafe_code)]

use pds_match_cli::{CliError, run};

fn main() {
    match run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("pds-match: {err}");
            std::process::exit(1);
        }
    }
}
