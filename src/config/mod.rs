//! Section-scoped parsing of the ACS run configuration.
//!
//! The config file is a line-oriented INI subset: bracketed section
//! headers and `key = value` lines. There are no comments, quoting or
//! multi-line values. Each domain reads only its own section and binds the
//! keys its schema recognizes; everything else is ignored.

mod model;
mod operations;
pub mod section;
pub mod types;


// Re-export public API
pub use model::ConfigRecord;
pub use types::{CommandSpec, Domain, DomainSchema, KeyKind, SectionBoundary};
