//! CLI argument parsing for acs-parser.
//!
//! Uses clap derive macros. The firmware tool took single-dash long flags
//! (`-bsa`, `-bbsr_sct`); those are rewritten to their double-dash form
//! before clap sees them, so both spellings work.

use crate::config::{Domain, SectionBoundary};
use crate::publish::OutputFormat;
use clap::error::ErrorKind;
use clap::{ArgAction, ArgGroup, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Parse the ACS run configuration and emit per-suite run flags and
/// test-runner command lines.
///
/// Without a suite flag the located config file is printed.
#[derive(Parser, Debug)]
#[command(name = "acs-parser")]
#[command(author, version, about, long_about = None)]
#[command(
    override_usage = "acs-parser [OPTIONS] [-bsa | -sbsa | -sct | -bbsr_sct | -automation | -scrt | -all]"
)]
#[command(group(
    ArgGroup::new("suite")
        .args(["bsa", "sbsa", "sct", "bbsr_sct", "automation", "scrt", "all"])
        .multiple(false)
))]
pub struct Cli {
    /// Run BSA-specific logic.
    #[arg(long)]
    pub bsa: bool,

    /// Run SBSA-specific logic.
    #[arg(long)]
    pub sbsa: bool,

    /// Run SCT-specific logic.
    #[arg(long)]
    pub sct: bool,

    /// Run BBSR-SCT logic.
    #[arg(long = "bbsr_sct")]
    pub bbsr_sct: bool,

    /// Run automation-specific logic.
    #[arg(long)]
    pub automation: bool,

    /// Run SCRT-specific logic.
    #[arg(long)]
    pub scrt: bool,

    /// Run every suite.
    #[arg(long)]
    pub all: bool,

    /// Config file to use instead of searching the roots.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory searched for acs_tests/config/acs_run_config.ini (repeatable).
    ///
    /// Defaults to $ACS_CONFIG_ROOTS, else the current directory, /mnt and /.
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Scan sections like the firmware parser: headers match by prefix and a
    /// section never ends.
    #[arg(long)]
    pub legacy_sections: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the variables as a sourceable shell script.
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Outcome of argument parsing.
#[derive(Debug)]
pub enum Invocation {
    /// Valid arguments.
    Run(Box<Cli>),
    /// Print this text and exit successfully.
    Usage(String),
}

/// Which suites to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No suite flag: show the config file.
    View,
    Domains(Vec<Domain>),
}

impl Cli {
    /// Parse the process arguments.
    pub fn parse_args() -> Invocation {
        Self::parse_from_args(std::env::args_os())
    }

    /// Parse an argument list (first element is the program name).
    ///
    /// Any parse error yields the usage text rather than a failure status.
    pub fn parse_from_args<I, T>(args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        match Self::try_parse_from(normalize_args(args)) {
            Ok(cli) => Invocation::Run(Box::new(cli)),
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Invocation::Usage(err.render().to_string())
                }
                _ => Invocation::Usage(usage_text()),
            },
        }
    }

    pub fn selection(&self) -> Selection {
        if self.all {
            return Selection::Domains(Domain::ALL.to_vec());
        }

        let chosen = [
            (self.bsa, Domain::Bsa),
            (self.sbsa, Domain::Sbsa),
            (self.sct, Domain::Sct),
            (self.bbsr_sct, Domain::BbsrSct),
            (self.automation, Domain::Automation),
            (self.scrt, Domain::Scrt),
        ]
        .into_iter()
        .find_map(|(set, domain)| set.then_some(domain));

        match chosen {
            Some(domain) => Selection::Domains(vec![domain]),
            None => Selection::View,
        }
    }

    pub fn boundary(&self) -> SectionBoundary {
        if self.legacy_sections {
            SectionBoundary::Legacy
        } else {
            SectionBoundary::Strict
        }
    }
}

/// The help text printed for unrecognized invocations.
pub fn usage_text() -> String {
    Cli::command().render_help().to_string()
}

/// Rewrite `-bsa`-style arguments to `--bsa`. The program name is left alone.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        let rewritten = match arg.to_str() {
            Some(s) if i > 0 => s
                .strip_prefix('-')
                .filter(|name| *name == "all" || Domain::from_flag(name).is_some())
                .map(|name| OsString::from(format!("--{}", name))),
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }
    out
}
