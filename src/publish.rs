//! Publishing domain results as shell variables.
//!
//! The firmware shell consumed the results as session environment
//! variables (`automation_bsa_run`, `BsaCommand`, ...). Here they are an
//! explicit [`Exports`] value that can be printed in several formats or
//! written to an env file for the surrounding shell to source.

use crate::error::{ParserError, Result};
use crate::fs::atomic_write_file;
use crate::pipeline::DomainReport;
use chrono::Utc;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Output format for stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `<DOMAIN> Command String: ...` followed by `name = value` lines.
    #[default]
    Text,
    /// `NAME=value` lines.
    Env,
    /// POSIX `export NAME='value'` statements.
    Shell,
    /// One JSON document with reports and variables.
    Json,
}

/// A single published variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Export {
    pub name: &'static str,
    pub value: String,
}

/// Ordered variables derived from one or more domain reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Exports {
    vars: Vec<Export>,
}

impl Exports {
    /// Each report contributes its enable key (`true`/`false`), then its
    /// command variable when the domain has one.
    pub fn from_reports(reports: &[DomainReport]) -> Self {
        let mut vars = Vec::new();
        for report in reports {
            let schema = report.domain.schema();
            vars.push(Export {
                name: schema.enable_key,
                value: report.enabled.to_string(),
            });
            if let (Some(spec), Some(command)) = (&schema.command, &report.command) {
                vars.push(Export {
                    name: spec.variable,
                    value: command.clone(),
                });
            }
        }
        Self { vars }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Export> {
        self.vars.iter()
    }

    /// `NAME=value` per line, values unquoted.
    pub fn to_env_lines(&self) -> String {
        let mut out = String::new();
        for var in &self.vars {
            let _ = writeln!(out, "{}={}", var.name, var.value);
        }
        out
    }

    /// `export NAME=<quoted>` per line, quoted for a POSIX shell.
    pub fn to_shell(&self) -> String {
        let mut out = String::new();
        for var in &self.vars {
            let _ = writeln!(out, "export {}={}", var.name, shell_words::quote(&var.value));
        }
        out
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    reports: &'a [DomainReport],
    exports: &'a Exports,
}

/// Render reports for stdout in the requested format.
pub fn render(reports: &[DomainReport], format: OutputFormat) -> Result<String> {
    let exports = Exports::from_reports(reports);
    match format {
        OutputFormat::Text => Ok(render_text(reports, &exports)),
        OutputFormat::Env => Ok(exports.to_env_lines()),
        OutputFormat::Shell => Ok(exports.to_shell()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&JsonOutput {
                reports,
                exports: &exports,
            })
            .map_err(|e| ParserError::WriteFailure(format!("failed to serialize JSON: {}", e)))?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_text(reports: &[DomainReport], exports: &Exports) -> String {
    let mut out = String::new();
    for report in reports {
        if let Some(command) = &report.command {
            let _ = writeln!(out, "{} Command String: {}", report.domain, command);
        }
    }
    for var in exports.iter() {
        let _ = writeln!(out, "{} = {}", var.name, var.value);
    }
    out
}

/// Write exports to `path` as a sourceable shell script, atomically.
pub fn write_env_file(path: &Path, exports: &Exports) -> Result<()> {
    let mut content = format!(
        "# Generated by acs-parser at {}\n",
        Utc::now().to_rfc3339()
    );
    content.push_str(&exports.to_shell());
    atomic_write_file(path, &content)?;
    info!(path = %path.display(), variables = exports.iter().count(), "wrote env file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Domain;
    use tempfile::TempDir;

    fn reports() -> Vec<DomainReport> {
        vec![
            DomainReport {
                domain: Domain::Bsa,
                enabled: true,
                command: Some("bsa.efi -m pcie -t 1,2,3".to_string()),
            },
            DomainReport {
                domain: Domain::Scrt,
                enabled: false,
                command: None,
            },
        ]
    }

    #[test]
    fn test_exports_names_and_order() {
        let exports = Exports::from_reports(&reports());
        let names: Vec<&str> = exports.iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["automation_bsa_run", "BsaCommand", "automation_scrt_run"]);
        assert_eq!(exports.get("automation_bsa_run"), Some("true"));
        assert_eq!(exports.get("BsaCommand"), Some("bsa.efi -m pcie -t 1,2,3"));
        assert_eq!(exports.get("automation_scrt_run"), Some("false"));
        assert_eq!(exports.get("SbsaCommand"), None);
    }

    #[test]
    fn test_command_variable_per_domain() {
        let cases = [
            (Domain::Sbsa, "SbsaCommand"),
            (Domain::Sct, "SctCommand"),
            (Domain::BbsrSct, "BbsrSctCommand"),
        ];
        for (domain, variable) in cases {
            let exports = Exports::from_reports(&[DomainReport {
                domain,
                enabled: false,
                command: Some("x".to_string()),
            }]);
            assert_eq!(exports.get(variable), Some("x"));
        }
    }

    #[test]
    fn test_automation_publishes_generic_flag() {
        let exports = Exports::from_reports(&[DomainReport {
            domain: Domain::Automation,
            enabled: true,
            command: None,
        }]);
        assert_eq!(exports.iter().count(), 1);
        assert_eq!(exports.get("config_enabled_for_automation_run"), Some("true"));
    }

    #[test]
    fn test_env_lines() {
        let exports = Exports::from_reports(&reports());
        assert_eq!(
            exports.to_env_lines(),
            "automation_bsa_run=true\nBsaCommand=bsa.efi -m pcie -t 1,2,3\nautomation_scrt_run=false\n"
        );
    }

    #[test]
    fn test_shell_quotes_values() {
        let exports = Exports::from_reports(&reports());
        let shell = exports.to_shell();
        assert!(shell.contains("export automation_bsa_run=true\n"));
        assert!(shell.contains("export BsaCommand='bsa.efi -m pcie -t 1,2,3'\n"));

        let parsed = shell_words::split("'bsa.efi -m pcie -t 1,2,3'").unwrap();
        assert_eq!(parsed, vec!["bsa.efi -m pcie -t 1,2,3"]);
    }

    #[test]
    fn test_render_text() {
        let text = render(&reports(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "BSA Command String: bsa.efi -m pcie -t 1,2,3\n\
             automation_bsa_run = true\n\
             BsaCommand = bsa.efi -m pcie -t 1,2,3\n\
             automation_scrt_run = false\n"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render(&reports(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["reports"][0]["domain"], "BSA");
        assert_eq!(value["reports"][1]["enabled"], false);
        assert_eq!(value["exports"][1]["name"], "BsaCommand");
        assert_eq!(value["exports"][1]["value"], "bsa.efi -m pcie -t 1,2,3");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], OutputFormat::Env).unwrap(), "");
        assert_eq!(Exports::from_reports(&[]).iter().count(), 0);
    }

    #[test]
    fn test_write_env_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("acs.env");

        let exports = Exports::from_reports(&reports());
        write_env_file(&path, &exports).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Generated by acs-parser at "));
        assert!(content.ends_with(&exports.to_shell()));
    }
}
