//! acs-parser: run-configuration parser for the Arm ACS test suites.
//!
//! Parses arguments, locates and reads `acs_run_config.ini`, and emits
//! per-suite run flags and runner command lines. Errors are printed to
//! stderr and mapped to exit codes.

mod cli;
mod command;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod pipeline;
pub mod publish;

#[cfg(test)]
mod test_support;

use cli::{Cli, Invocation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Invocation::Run(cli) => cli,
        Invocation::Usage(text) => {
            print!("{}", text);
            return ExitCode::from(exit_codes::SUCCESS as u8);
        }
    };

    logging::init(cli.verbose);

    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
