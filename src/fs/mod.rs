//! Filesystem utilities for acs-parser.
//!
//! Output files (the env file) are written atomically so a shell sourcing
//! them never sees a partial write.

pub mod atomic;

pub use atomic::atomic_write_file;
