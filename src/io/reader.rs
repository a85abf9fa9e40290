//! File loading with memory mapping support.
//!
//! Opens a file read-only and brings its whole contents into memory,
//! either by mapping it or by reading it into an owned buffer.

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::core::{LoadStrategy, LoadedBuffer};
use crate::error::{IoError, Result};
use log::{debug, trace};
use memmap2::Mmap;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek};
use std::path::{Path, PathBuf};

/// Read-only handle on a file about to be loaded.
///
/// [`FileReader::load`] picks the strategy:
/// - Empty files: read directly (there is nothing to map)
/// - Everything else: memory mapped
///
/// # Examples
///
/// ```no_run
/// use mmap_len::io::FileReader;
///
/// let reader = FileReader::open("large_file.bin").unwrap();
/// let buffer = reader.load().unwrap();
/// println!("{}", buffer.len());
/// ```
#[derive(Debug)]
pub struct FileReader {
    /// File handle.
    file: File,
    /// File size in bytes at open time.
    size: u64,
    /// File path.
    path: PathBuf,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if nothing exists at `path`, and
    /// [`IoError::ReadFailed`] if it can't be opened or isn't a regular file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        let file = File::open(path_ref).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                IoError::FileNotFound {
                    path: path_str.clone(),
                }
            } else {
                IoError::ReadFailed {
                    path: path_str.clone(),
                    reason: e.to_string(),
                }
            }
        })?;

        let metadata = file.metadata().map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        if !metadata.is_file() {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: "not a regular file".to_string(),
            }
            .into());
        }

        let size = metadata.len();
        debug!("opened {path_str} ({size} bytes)");

        Ok(Self {
            file,
            size,
            path: path_ref.to_path_buf(),
        })
    }

    /// Returns the file size in bytes as reported when the file was opened.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the strategy [`FileReader::load`] will use.
    #[must_use]
    pub const fn strategy(&self) -> LoadStrategy {
        if self.size == 0 {
            LoadStrategy::Direct
        } else {
            LoadStrategy::Mmap
        }
    }

    /// Loads the whole file.
    ///
    /// # Errors
    ///
    /// Returns an error if mapping or reading fails.
    pub fn load(&self) -> Result<LoadedBuffer> {
        let strategy = self.strategy();
        trace!("loading {} via {strategy}", self.path.display());
        match strategy {
            LoadStrategy::Mmap => self.mmap(),
            LoadStrategy::Direct => self.read_direct(),
        }
    }

    /// Creates a memory-mapped view of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if memory mapping fails.
    pub fn mmap(&self) -> Result<LoadedBuffer> {
        // Safety: the map is read-only and the file is never written through it
        let mmap = unsafe {
            Mmap::map(&self.file).map_err(|e| IoError::MmapFailed {
                path: self.path.to_string_lossy().to_string(),
                reason: e.to_string(),
            })?
        };

        debug!("mapped {} bytes of {}", mmap.len(), self.path.display());
        Ok(LoadedBuffer::from_mmap(&self.path, mmap))
    }

    /// Reads the whole file into an owned buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails.
    pub fn read_direct(&self) -> Result<LoadedBuffer> {
        let read_failed = |e: std::io::Error| IoError::ReadFailed {
            path: self.path.to_string_lossy().to_string(),
            reason: e.to_string(),
        };

        // The handle is shared, so always start from the beginning
        let mut file = &self.file;
        file.rewind().map_err(read_failed)?;

        let mut bytes = Vec::with_capacity(usize::try_from(self.size).unwrap_or(0));
        file.read_to_end(&mut bytes).map_err(read_failed)?;

        debug!("read {} bytes of {}", bytes.len(), self.path.display());
        Ok(LoadedBuffer::from_bytes(&self.path, bytes))
    }
}

/// Loads a file, choosing the strategy automatically.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, mapped, or read.
///
/// # Examples
///
/// ```no_run
/// use mmap_len::io::load_file;
///
/// let buffer = load_file("example.bin").unwrap();
/// assert_eq!(buffer.len(), buffer.as_bytes().len());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<LoadedBuffer> {
    FileReader::open(path)?.load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_small_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(&temp_dir, "small.txt", b"Hello, world!");

        let buffer = load_file(&path).unwrap();
        assert_eq!(buffer.len(), 13);
        assert_eq!(buffer.as_bytes(), b"Hello, world!");
        assert_eq!(buffer.strategy(), LoadStrategy::Mmap);
        assert_eq!(buffer.source(), path.as_path());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(&temp_dir, "empty.bin", b"");

        let buffer = load_file(&path).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.strategy(), LoadStrategy::Direct);
    }

    #[test]
    fn test_load_binary_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(&temp_dir, "bytes.bin", b"binary\x00data\xff");

        let buffer = load_file(&path).unwrap();
        assert_eq!(buffer.as_bytes(), b"binary\x00data\xff");
    }

    #[test]
    fn test_mmap_and_direct_agree() {
        let temp_dir = TempDir::new().unwrap();
        let content: Vec<u8> = (0..=255u8).cycle().take(64 * 1024 + 17).collect();
        let path = write_fixture(&temp_dir, "pattern.bin", &content);

        let reader = FileReader::open(&path).unwrap();
        let mapped = reader.mmap().unwrap();
        let direct = reader.read_direct().unwrap();

        assert_eq!(mapped.strategy(), LoadStrategy::Mmap);
        assert_eq!(direct.strategy(), LoadStrategy::Direct);
        assert_eq!(mapped.len(), content.len());
        assert_eq!(&mapped[..], &direct[..]);
    }

    #[test]
    fn test_read_direct_twice() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(&temp_dir, "twice.bin", b"0123456789");

        let reader = FileReader::open(&path).unwrap();
        assert_eq!(reader.read_direct().unwrap().len(), 10);
        assert_eq!(reader.read_direct().unwrap().len(), 10);
    }

    #[test]
    fn test_file_reader_size_and_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(&temp_dir, "test.txt", b"Hello");

        let reader = FileReader::open(&path).unwrap();
        assert_eq!(reader.size(), 5);
        assert_eq!(reader.path(), path.as_path());
        assert_eq!(reader.strategy(), LoadStrategy::Mmap);
    }

    #[test]
    fn test_open_nonexistent() {
        let result = FileReader::open("/nonexistent/path/file.bin");
        assert!(matches!(
            result,
            Err(Error::Io(IoError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_load_nonexistent() {
        assert!(load_file("/nonexistent/path/file.bin").is_err());
    }

    #[test]
    fn test_open_failure_other_than_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let parent = write_fixture(&temp_dir, "plain.bin", b"not a directory");

        // A regular file used as a directory component fails with ENOTDIR
        let result = FileReader::open(parent.join("child.bin"));
        match result {
            Err(Error::Io(IoError::ReadFailed { path, reason })) => {
                assert!(path.ends_with("child.bin"));
                assert!(!reason.is_empty());
            }
            other => unreachable!("expected ReadFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_open_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileReader::open(temp_dir.path());
        match result {
            Err(Error::Io(IoError::ReadFailed { reason, .. })) => {
                assert!(reason.contains("not a regular file"));
            }
            other => unreachable!("expected ReadFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_loads_identical() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(&temp_dir, "same.bin", &[7u8; 1000]);

        let first = load_file(&path).unwrap();
        let second = load_file(&path).unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(&first[..], &second[..]);
    }
}
