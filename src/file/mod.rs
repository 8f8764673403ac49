//! Input loading for debug artifacts.
//!
//! This module provides the two whole-file reads the extraction pipelines depend on:
//!
//! - [`Dump`] - a read-only VRAM snapshot, memory-mapped from disk or wrapped around an
//!   in-memory buffer
//! - [`read_log`] - a register-summary log read into a single string
//!
//! Both loads happen once, before any analysis runs. The analyzers themselves only ever
//! see `&[u8]` or `&str`.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dumpscope::file::{read_log, Dump};
//!
//! let dump = Dump::from_file("dumps/frame_120.vram")?;
//! println!("Snapshot: {} bytes", dump.len());
//!
//! let log = read_log("emulator.log")?;
//! println!("Log: {} lines", log.lines().count());
//! # Ok::<(), dumpscope::Error>(())
//! ```

mod memory;
mod physical;

use std::{fs, path::Path};

pub use memory::Memory;
pub use physical::Physical;

use crate::Result;

/// Backend trait for snapshot data sources.
///
/// This trait abstracts over the source of snapshot data, allowing for both in-memory and
/// on-disk representations. All implementations must be thread-safe.
pub trait Backend: Send + Sync {
    /// Returns a slice of the data at the given offset and length.
    ///
    /// # Arguments
    ///
    /// * `offset` - The starting offset within the data.
    /// * `len` - The length of the slice in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the requested range is out of bounds.
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]>;

    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];

    /// Returns the total length of the data buffer.
    fn len(&self) -> usize;
}

/// A loaded VRAM snapshot.
///
/// Immutable for its whole lifetime. Construct it with [`Dump::from_file`] for snapshots on
/// disk or [`Dump::from_mem`] for buffers already in memory.
pub struct Dump {
    backend: Box<dyn Backend>,
}

impl Dump {
    /// Memory-map the snapshot at `path`.
    ///
    /// Zero-length files are accepted and produce an empty dump.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened, inspected or mapped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Dump> {
        let file = fs::File::open(path.as_ref())?;
        if file.metadata()?.len() == 0 {
            return Ok(Dump::from_mem(Vec::new()));
        }

        let physical = Physical::from_std_file(&file)?;
        log::debug!(
            "mapped {} ({} bytes)",
            path.as_ref().display(),
            physical.len()
        );

        Ok(Dump {
            backend: Box::new(physical),
        })
    }

    /// Wrap an in-memory snapshot.
    #[must_use]
    pub fn from_mem(data: Vec<u8>) -> Dump {
        Dump {
            backend: Box::new(Memory::new(data)),
        }
    }

    /// The complete snapshot.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.backend.data()
    }

    /// Total snapshot length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Returns true if the snapshot holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backend.len() == 0
    }

    /// Select an analysis window.
    ///
    /// `start` defaults to the beginning of the snapshot and `len` to everything after
    /// `start`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the window reaches past the end of the
    /// snapshot.
    pub fn window(&self, start: Option<usize>, len: Option<usize>) -> Result<&[u8]> {
        let start = start.unwrap_or(0);
        let len = match len {
            Some(len) => len,
            None => self
                .len()
                .checked_sub(start)
                .ok_or(crate::Error::OutOfBounds)?,
        };

        self.backend.data_slice(start, len)
    }
}

impl std::fmt::Debug for Dump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dump").field("len", &self.len()).finish()
    }
}

/// Read a register-summary log into memory.
///
/// Invalid UTF-8 sequences are replaced with `U+FFFD` instead of failing the read, since
/// emulator logs regularly contain raw bytes from guest output.
///
/// # Errors
/// Returns [`crate::Error::FileError`] if the file cannot be read.
pub fn read_log(path: impl AsRef<Path>) -> Result<String> {
    let bytes = fs::read(path.as_ref())?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            log::debug!(
                "{} contains invalid UTF-8 at byte {}, replacing",
                path.as_ref().display(),
                err.utf8_error().valid_up_to()
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}
