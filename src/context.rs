//! Config file resolution for acs-parser.
//!
//! The run configuration lives at a fixed relative path,
//! `acs_tests/config/acs_run_config.ini`, on whichever volume carries the
//! ACS test tree. Resolution probes an ordered list of search roots (one
//! per mounted volume) and takes the first hit.
//!
//! Reading happens once per invocation. The byte count read must match
//! the size the file reports; the bytes are then decoded to text.

use crate::error::{ParserError, Result};
use std::env;
use std::ffi::OsString;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Location of the config file relative to a search root.
pub const CONFIG_RELATIVE_PATH: &str = "acs_tests/config/acs_run_config.ini";

/// Environment variable holding a platform path list of search roots.
pub const ROOTS_ENV_VAR: &str = "ACS_CONFIG_ROOTS";

/// Roots probed when neither `--root` nor `ACS_CONFIG_ROOTS` is given,
/// after the current directory.
pub const DEFAULT_ROOTS: &[&str] = &["/mnt", "/"];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];

/// Search roots from the environment, falling back to the defaults.
pub fn default_search_roots() -> Vec<PathBuf> {
    search_roots_from(env::var_os(ROOTS_ENV_VAR), env::current_dir().ok())
}

/// Build the search root list from an optional `ACS_CONFIG_ROOTS` value
/// and the current directory.
pub fn search_roots_from(env_value: Option<OsString>, cwd: Option<PathBuf>) -> Vec<PathBuf> {
    if let Some(raw) = env_value
        && !raw.is_empty()
    {
        return env::split_paths(&raw).collect();
    }

    cwd.into_iter()
        .chain(DEFAULT_ROOTS.iter().map(PathBuf::from))
        .collect()
}

/// Find the config file.
///
/// An explicit path is used as-is. Otherwise each root is probed in order
/// for [`CONFIG_RELATIVE_PATH`].
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the config file
/// * `Err(ParserError::ConfigFileNotFound)` - Nothing found
pub fn locate_config_file(explicit: Option<&Path>, roots: &[PathBuf]) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(ParserError::ConfigFileNotFound {
            searched: path.display().to_string(),
        });
    }

    for root in roots {
        let candidate = root.join(CONFIG_RELATIVE_PATH);
        if candidate.is_file() {
            info!(path = %candidate.display(), "found config file");
            return Ok(candidate);
        }
        debug!(root = %root.display(), "config file not under search root");
    }

    let searched = roots
        .iter()
        .map(|r| r.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(ParserError::ConfigFileNotFound { searched })
}

/// Read and decode the config file.
///
/// # Returns
///
/// * `Ok(String)` - Decoded text
/// * `Err(ParserError::ReadFailure)` - Open, metadata or read error
/// * `Err(ParserError::AllocationFailure)` - Buffer for the file could not be reserved
/// * `Err(ParserError::UnexpectedEndOfFile)` - Fewer bytes than the reported size
/// * `Err(ParserError::ParseFailure)` - Content is not decodable
pub fn read_config_text(path: &Path) -> Result<String> {
    let read_failure = |source| ParserError::ReadFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ParserError::ConfigFileNotFound {
                searched: path.display().to_string(),
            }
        } else {
            read_failure(source)
        }
    })?;
    let expected = file.metadata().map_err(read_failure)?.len();

    let bytes = read_reported_size(file, expected, path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read config file");
    decode_text(&bytes)
}

/// Read everything from `reader`, failing when fewer than `expected` bytes
/// arrive.
fn read_reported_size<R: Read>(mut reader: R, expected: u64, path: &Path) -> Result<Vec<u8>> {
    let capacity = usize::try_from(expected).map_err(|_| {
        ParserError::AllocationFailure(format!(
            "reading '{}': {} bytes do not fit in memory",
            path.display(),
            expected
        ))
    })?;

    let mut bytes = Vec::new();
    bytes.try_reserve_exact(capacity).map_err(|e| {
        ParserError::AllocationFailure(format!("reading '{}': {}", path.display(), e))
    })?;

    reader
        .read_to_end(&mut bytes)
        .map_err(|source| ParserError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

    let read = bytes.len() as u64;
    if read < expected {
        return Err(ParserError::UnexpectedEndOfFile {
            path: path.to_path_buf(),
            read,
            expected,
        });
    }

    Ok(bytes)
}

/// Decode raw config bytes.
///
/// A UTF-16LE byte-order mark selects strict UTF-16LE decoding. Anything
/// else is treated as UTF-8 (BOM optional) with invalid sequences replaced.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    if let Some(rest) = bytes.strip_prefix(UTF16LE_BOM) {
        if rest.len() % 2 != 0 {
            return Err(ParserError::ParseFailure(
                "UTF-16LE content has an odd byte length".to_string(),
            ));
        }
        let units = rest
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
        return char::decode_utf16(units)
            .collect::<std::result::Result<String, _>>()
            .map_err(|e| ParserError::ParseFailure(format!("invalid UTF-16LE content: {}", e)));
    }

    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    Ok(String::from_utf8_lossy(bytes).into_owned())
}
