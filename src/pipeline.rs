//! Per-domain pipeline: section extraction, binding and command synthesis.

use crate::command::synthesize;
use crate::config::{ConfigRecord, Domain, SectionBoundary};
use crate::error::Result;
use serde::Serialize;
use tracing::info;

/// Result of running one domain's pipeline.
///
/// This replaces writing into the shell environment: callers decide how to
/// publish it (see `publish::Exports`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainReport {
    pub domain: Domain,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Parse and synthesize a single domain.
pub fn run_domain(domain: Domain, text: &str, boundary: SectionBoundary) -> Result<DomainReport> {
    let record = ConfigRecord::parse(domain, text, boundary)?;
    let command = synthesize(&record)?;

    info!(
        domain = %domain,
        enabled = record.enabled(),
        command = command.as_deref().unwrap_or("-"),
        "resolved domain configuration"
    );

    Ok(DomainReport {
        domain,
        enabled: record.enabled(),
        command,
    })
}

/// Run several domains; the first failure aborts the whole run.
pub fn run_domains(
    domains: &[Domain],
    text: &str,
    boundary: SectionBoundary,
) -> Result<Vec<DomainReport>> {
    domains
        .iter()
        .map(|&domain| run_domain(domain, text, boundary))
        .collect()
}
