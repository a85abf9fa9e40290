//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Memory-map a file and print the number of bytes loaded.
#[derive(Parser, Debug)]
#[command(name = "mmap-len")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the file to load.
    pub file: PathBuf,
}
