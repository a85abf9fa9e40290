//! Output formatting for the CLI.

use crate::error::Error;

/// Formats the byte count line printed on success.
#[must_use]
pub fn format_byte_count(len: usize) -> String {
    format!("{len}\n")
}

/// Formats an error for standard error.
#[must_use]
pub fn format_error(error: &Error) -> String {
    error.to_string()
}
