//! Binding section key/value pairs onto a ConfigRecord.

use super::model::ConfigRecord;
use super::section::section_pairs;
use super::types::{Domain, KeyKind, SectionBoundary};
use crate::error::{ParserError, Result};
use tracing::{debug, trace};

impl ConfigRecord {
    /// Parse one domain's section out of the raw config text.
    ///
    /// A missing section is not an error; the result is an empty record.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigRecord)` - Bound record
    /// * `Err(ParserError::AllocationFailure)` - A value could not be copied
    pub fn parse(domain: Domain, text: &str, boundary: SectionBoundary) -> Result<Self> {
        let schema = domain.schema();
        let mut record = ConfigRecord::new(domain);

        for (key, value) in section_pairs(text, schema, boundary) {
            record.bind(key, value)?;
        }

        if record.is_empty() {
            debug!(domain = %domain, ?boundary, "no recognized keys in section");
        } else {
            debug!(domain = %domain, enabled = record.enabled(), "parsed section");
        }
        Ok(record)
    }

    /// Bind a single trimmed pair. Returns whether the key was recognized.
    ///
    /// Keys are compared in full, so `automation_bsa_run_extra` does not
    /// bind `automation_bsa_run`.
    pub fn bind(&mut self, key: &str, value: &str) -> Result<bool> {
        let domain = self.domain();
        let Some(spec) = domain.schema().key(key) else {
            trace!(domain = %domain, key, "ignoring unrecognized key");
            return Ok(false);
        };

        if value.is_empty() {
            return Ok(false);
        }

        match spec.kind {
            KeyKind::Bool => self.set_flag(spec.name, value == "true"),
            KeyKind::Text => {
                let mut owned = String::new();
                owned.try_reserve_exact(value.len()).map_err(|e| {
                    ParserError::AllocationFailure(format!(
                        "copying value of '{}' in [{}]: {}",
                        spec.name, domain, e
                    ))
                })?;
                owned.push_str(value);
                self.set_value(spec.name, owned);
            }
        }

        Ok(true)
    }
}
