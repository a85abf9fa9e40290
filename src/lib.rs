//! # mmap-len
//!
//! Memory-map a file and report how many bytes were loaded.
//!
//! The library side exposes the pieces the `mmap-len` binary is built from:
//!
//! - **Loading**: [`io::FileReader`] opens a file read-only and maps it (or
//!   reads it, for empty files) into a [`core::LoadedBuffer`]
//! - **CLI**: [`cli::Cli`] and [`cli::execute`] turn a path into the output line
//! - **Diagnostics**: [`logging`] routes `log` records to standard error
//!
//! ```no_run
//! use mmap_len::io::load_file;
//!
//! let buffer = load_file("data.bin")?;
//! assert_eq!(buffer.len(), buffer.as_bytes().len());
//! # Ok::<(), mmap_len::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{BufferMetadata, LoadStrategy, LoadedBuffer};

// Re-export loading entry points
pub use io::{FileReader, load_file};

// Re-export CLI types
pub use cli::{Cli, execute};
