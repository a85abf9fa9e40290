//! I/O utilities for mmap-len.
//!
//! Provides whole-file loading with memory mapping support.

pub mod reader;

pub use reader::{FileReader, load_file};
