//! Core domain model for mmap-len.
//!
//! The only entity is the loaded buffer: the full contents of one file,
//! held in memory for as long as the process runs.

pub mod buffer;

pub use buffer::{BufferMetadata, LoadStrategy, LoadedBuffer};
