//! The loaded buffer.
//!
//! A [`LoadedBuffer`] holds the full contents of one file, either as a
//! read-only memory map or as an owned copy. It is created once, never
//! mutated, and dropped at process exit.

use memmap2::Mmap;
use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// How the bytes of a [`LoadedBuffer`] were brought into memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Read-only memory map of the file.
    Mmap,
    /// Whole file read into an owned vector.
    Direct,
}

impl LoadStrategy {
    /// Returns the strategy name as used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mmap => "mmap",
            Self::Direct => "direct",
        }
    }
}

impl fmt::Display for LoadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata associated with a loaded buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferMetadata {
    /// Path the buffer was loaded from.
    pub source: PathBuf,

    /// Strategy used to load the bytes.
    pub strategy: LoadStrategy,

    /// Total size in bytes.
    pub size: usize,
}

enum Storage {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

/// Full contents of a file, held in memory.
///
/// Dereferences to `[u8]`; there is no mutable access.
///
/// # Examples
///
/// ```
/// use mmap_len::core::{LoadStrategy, LoadedBuffer};
///
/// let buffer = LoadedBuffer::from_bytes("data.bin", b"abc".to_vec());
/// assert_eq!(buffer.len(), 3);
/// assert_eq!(buffer.strategy(), LoadStrategy::Direct);
/// ```
pub struct LoadedBuffer {
    storage: Storage,
    metadata: BufferMetadata,
}

impl LoadedBuffer {
    /// Wraps a memory map of the file at `source`.
    #[must_use]
    pub fn from_mmap<P: Into<PathBuf>>(source: P, mmap: Mmap) -> Self {
        let size = mmap.len();
        Self {
            storage: Storage::Mapped(mmap),
            metadata: BufferMetadata {
                source: source.into(),
                strategy: LoadStrategy::Mmap,
                size,
            },
        }
    }

    /// Wraps bytes read directly from the file at `source`.
    #[must_use]
    pub fn from_bytes<P: Into<PathBuf>>(source: P, bytes: Vec<u8>) -> Self {
        let size = bytes.len();
        Self {
            storage: Storage::Owned(bytes),
            metadata: BufferMetadata {
                source: source.into(),
                strategy: LoadStrategy::Direct,
                size,
            },
        }
    }

    /// Returns the byte count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the loaded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.storage {
            Storage::Mapped(mmap) => &mmap[..],
            Storage::Owned(bytes) => bytes.as_slice(),
        }
    }

    /// Returns the path the buffer was loaded from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.metadata.source
    }

    /// Returns the strategy used to load the buffer.
    #[must_use]
    pub const fn strategy(&self) -> LoadStrategy {
        self.metadata.strategy
    }

    /// Returns the buffer metadata.
    #[must_use]
    pub const fn metadata(&self) -> &BufferMetadata {
        &self.metadata
    }
}

impl Deref for LoadedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for LoadedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for LoadedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedBuffer")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
