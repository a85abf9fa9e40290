//! CLI layer for mmap-len.
//!
//! Provides the command-line interface using clap: one positional path,
//! one line of output.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use parser::Cli;
