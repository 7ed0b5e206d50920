//! Running the selected suites against the config text.

use super::RunOptions;
use crate::config::Domain;
use crate::error::Result;
use crate::pipeline::run_domains;
use crate::publish::{Exports, render, write_env_file};

/// Resolve every domain, write the env file if asked, and render stdout.
///
/// The first failing domain aborts the run before anything is written.
pub fn cmd_run(domains: &[Domain], text: &str, options: &RunOptions) -> Result<String> {
    let reports = run_domains(domains, text, options.boundary)?;
    let output = render(&reports, options.format)?;

    if let Some(path) = &options.env_file {
        write_env_file(path, &Exports::from_reports(&reports))?;
    }

    Ok(output)
}
