//! Error types for the acs-parser CLI.
//!
//! Uses thiserror for derive macros. Every variant is terminal for the
//! current invocation and maps to one exit code.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for parser operations.
#[derive(Error, Debug)]
pub enum ParserError {
    /// No search root holds the config file, or the explicit path is missing.
    #[error("config file not found (searched: {searched})")]
    ConfigFileNotFound { searched: String },

    /// Opening or reading the config file failed.
    #[error("failed to read '{}': {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A buffer reservation failed.
    #[error("out of resources while {0}")]
    AllocationFailure(String),

    /// The file ended before its reported size was read.
    #[error("unexpected end of file '{}': read {read} of {expected} bytes", path.display())]
    UnexpectedEndOfFile {
        path: PathBuf,
        read: u64,
        expected: u64,
    },

    /// The config text could not be decoded.
    #[error("failed to parse config: {0}")]
    ParseFailure(String),

    /// The env file could not be written.
    #[error("failed to write output: {0}")]
    WriteFailure(String),
}

impl ParserError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParserError::ConfigFileNotFound { .. } => exit_codes::NOT_FOUND,
            ParserError::ReadFailure { .. } => exit_codes::DEVICE_ERROR,
            ParserError::AllocationFailure(_) => exit_codes::OUT_OF_RESOURCES,
            ParserError::UnexpectedEndOfFile { .. } => exit_codes::END_OF_FILE,
            ParserError::ParseFailure(_) => exit_codes::LOAD_ERROR,
            ParserError::WriteFailure(_) => exit_codes::WRITE_PROTECTED,
        }
    }
}

impl From<std::collections::TryReserveError> for ParserError {
    fn from(err: std::collections::TryReserveError) -> Self {
        ParserError::AllocationFailure(err.to_string())
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
