//! Command execution.

use crate::cli::output::format_byte_count;
use crate::cli::parser::Cli;
use crate::error::Result;
use crate::io::load_file;
use log::debug;

/// Executes the CLI command.
///
/// Loads the file named on the command line and returns the line to
/// print: the byte count followed by a newline.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, mapped, or read.
pub fn execute(cli: &Cli) -> Result<String> {
    let buffer = load_file(&cli.file)?;
    debug!(
        "loaded {} bytes from {} via {}",
        buffer.len(),
        buffer.source().display(),
        buffer.strategy()
    );
    Ok(format_byte_count(buffer.len()))
}
