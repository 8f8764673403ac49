//! Physical file backend for memory-mapped I/O.
//!
//! This module provides the [`crate::file::physical::Physical`] backend that implements the
//! [`crate::file::Backend`] trait for reading snapshot files from disk using memory-mapped I/O.
//! VRAM snapshots are scanned front to back exactly once, so mapping the file lets the
//! operating system page it in as the analyzer walks it instead of copying it up front.
//!
//! # Usage Examples
//!
//! ```rust,ignore
//! use dumpscope::file::{Physical, Backend};
//!
//! let physical = Physical::new("snapshot.vram")?;
//! println!("Snapshot size: {} bytes", physical.len());
//!
//! // First tile row of the first character
//! let row = physical.data_slice(0, 2)?;
//! # Ok::<(), dumpscope::Error>(())
//! ```

use super::Backend;
use crate::{Error::FileError, Error::OutOfBounds, Result};

use memmap2::Mmap;
use std::{fs, path::Path};

/// A file backend that uses memory-mapped I/O for read-only access to a snapshot on disk.
///
/// The mapping is created read-only and lives as long as the backend. All access operations
/// include bounds checking.
#[derive(Debug)]
pub struct Physical {
    /// Memory-mapped file data
    data: Mmap,
}

impl Physical {
    /// Create a new physical file backend by memory-mapping the specified file.
    ///
    /// # Arguments
    /// * `path` - Path to the snapshot on disk. Accepts `&Path`, `&str`, `String`, or `PathBuf`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or mapped.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let file = fs::File::open(path)?;
        Self::from_std_file(&file)
    }

    /// Creates a new physical file backend from an opened [`std::fs::File`].
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if memory mapping fails.
    pub fn from_std_file(file: &fs::File) -> Result<Physical> {
        // SAFETY: the mapping is read-only; concurrent truncation of the snapshot by another
        // process is outside what the tool supports.
        let mmap = unsafe { Mmap::map(file) }.map_err(FileError)?;

        Ok(Physical { data: mmap })
    }
}

impl Backend for Physical {
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        let Some(offset_end) = offset.checked_add(len) else {
            return Err(OutOfBounds);
        };

        if offset_end > self.data.len() {
            return Err(OutOfBounds);
        }

        Ok(&self.data[offset..offset_end])
    }

    fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
