//! Command implementations for acs-parser.
//!
//! The dispatcher resolves and reads the config file once, then either
//! shows it (no suite flag) or runs the selected suites.

mod run;
mod view;

use crate::cli::{Cli, Selection};
use crate::config::SectionBoundary;
use crate::context::{default_search_roots, locate_config_file, read_config_text};
use crate::error::Result;
use crate::publish::OutputFormat;
use std::path::PathBuf;

/// Settings shared by the commands, resolved from the CLI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub roots: Vec<PathBuf>,
    pub boundary: SectionBoundary,
    pub format: OutputFormat,
    pub env_file: Option<PathBuf>,
}

impl RunOptions {
    /// `--root` wins over `ACS_CONFIG_ROOTS` and the built-in roots.
    pub fn from_cli(cli: &Cli) -> Self {
        let roots = if cli.roots.is_empty() {
            default_search_roots()
        } else {
            cli.roots.clone()
        };

        Self {
            config: cli.config.clone(),
            roots,
            boundary: cli.boundary(),
            format: cli.format,
            env_file: cli.env_file.clone(),
        }
    }
}

/// Dispatch a parsed invocation to its implementation.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let options = RunOptions::from_cli(cli);
    let output = execute(&cli.selection(), &options)?;
    print!("{}", output);
    Ok(())
}

/// Run a selection and return what should go to stdout.
///
/// Nothing is returned for printing unless every step succeeded.
pub fn execute(selection: &Selection, options: &RunOptions) -> Result<String> {
    let path = locate_config_file(options.config.as_deref(), &options.roots)?;
    let text = read_config_text(&path)?;

    match selection {
        Selection::View => Ok(view::render_view(&path, &text)),
        Selection::Domains(domains) => run::cmd_run(domains, &text, options),
    }
}
