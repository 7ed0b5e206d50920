//! Exit code constants for the acs-parser CLI.
//!
//! The values mirror the low-order part of the UEFI status codes the
//! firmware shell uses, so scripts that check the status keep working:
//! - 0: Success
//! - 1: Parse failure (`EFI_LOAD_ERROR`)
//! - 7: Read failure (`EFI_DEVICE_ERROR`)
//! - 8: Output write failure (`EFI_WRITE_PROTECTED`)
//! - 9: Allocation failure (`EFI_OUT_OF_RESOURCES`)
//! - 14: Config file not found (`EFI_NOT_FOUND`)
//! - 31: Unexpected end of file (`EFI_END_OF_FILE`)

/// Successful execution. Also used after printing the usage message.
pub const SUCCESS: i32 = 0;

/// The config text could not be decoded.
pub const LOAD_ERROR: i32 = 1;

/// An I/O error occurred while reading the config file.
pub const DEVICE_ERROR: i32 = 7;

/// The env file could not be written.
pub const WRITE_PROTECTED: i32 = 8;

/// A buffer could not be allocated.
pub const OUT_OF_RESOURCES: i32 = 9;

/// No search root contains the config file.
pub const NOT_FOUND: i32 = 14;

/// The file ended before its reported size was read.
pub const END_OF_FILE: i32 = 31;
