//! Binary entry point for mmap-len.
//!
//! Prints the byte count of the file named by the first argument.

#![allow(clippy::print_stderr)]

use clap::Parser;
use mmap_len::cli::output::format_error;
use mmap_len::cli::{Cli, execute};
use mmap_len::error::{CommandError, Error};
use mmap_len::logging;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(output) => {
            // Handle broken pipe gracefully (e.g., when piped to `head`)
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush())
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                let err = Error::from(CommandError::OutputFailed(e.to_string()));
                eprintln!("Error: {}", format_error(&err));
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}
