//! ConfigRecord: the bound result of parsing one domain's section.

use super::types::Domain;
use std::collections::BTreeMap;

/// Typed values for the recognized keys of one domain.
///
/// Boolean keys default to `false`; text keys are absent until a
/// non-empty value is bound. Keys outside the domain schema never appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRecord {
    domain: Domain,
    flags: BTreeMap<&'static str, bool>,
    values: BTreeMap<&'static str, String>,
}

impl ConfigRecord {
    /// An empty record: every flag `false`, every text field absent.
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            flags: BTreeMap::new(),
            values: BTreeMap::new(),
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// The domain's enable flag.
    pub fn enabled(&self) -> bool {
        self.flag(self.domain.schema().enable_key)
    }

    /// Value of a boolean key; `false` when unset or unknown.
    pub fn flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Value of a text key, if set.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether nothing has been bound.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.values.is_empty()
    }

    pub(super) fn set_flag(&mut self, key: &'static str, value: bool) {
        self.flags.insert(key, value);
    }

    pub(super) fn set_value(&mut self, key: &'static str, value: String) {
        self.values.insert(key, value);
    }
}
