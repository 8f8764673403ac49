//! Low-resolution activity map of a buffer.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::{vram::AnalysisConfig, Result};

/// Count of non-zero chunks per page group, sparse and ordered by page index.
///
/// Pages without any non-zero chunk are absent; a stored count is never zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageBuckets {
    counts: BTreeMap<usize, usize>,
}

impl PageBuckets {
    /// Non-zero chunk count of `page`, `None` if the page had no activity.
    #[must_use]
    pub fn get(&self, page: usize) -> Option<usize> {
        self.counts.get(&page).copied()
    }

    /// `(page, count)` pairs in ascending page order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(page, count)| (*page, *count))
    }

    /// Number of pages with activity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no chunk held a non-zero byte.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of non-zero chunks across all pages.
    #[must_use]
    pub fn total_chunks(&self) -> usize {
        self.counts.values().sum()
    }

    fn bump(&mut self, page: usize) {
        *self.counts.entry(page).or_insert(0) += 1;
    }
}

/// A buffer whose length is not a whole number of chunks.
///
/// Purely informational; the trailing partial chunk is still analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthMismatch {
    /// Buffer length in bytes
    pub len: usize,
    /// Chunk size the length was checked against
    pub chunk_size: usize,
}

impl LengthMismatch {
    /// Bytes in the trailing partial chunk.
    #[must_use]
    pub fn remainder(&self) -> usize {
        self.len % self.chunk_size
    }
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VRAM dump length {:#x} not multiple of chunk {:#x}",
            self.len, self.chunk_size
        )
    }
}

/// Partitions a buffer into chunks and counts the non-zero ones per page group.
///
/// Chunk `i` covers `[i * chunk_size, (i + 1) * chunk_size)`, truncated at the end of the
/// buffer, and belongs to page `i * chunk_size / page_size`.
///
/// ```rust
/// use dumpscope::vram::{AnalysisConfig, PageBucketizer};
///
/// let mut data = vec![0u8; 2048];
/// data[1024 + 17] = 0x3C; // third 512-byte chunk
///
/// let bucketizer = PageBucketizer::new(&AnalysisConfig::default())?;
/// let pages = bucketizer.bucketize(&data);
/// assert_eq!(pages.iter().collect::<Vec<_>>(), [(0, 1)]);
/// # Ok::<(), dumpscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PageBucketizer {
    chunk_size: usize,
    page_size: usize,
}

impl PageBucketizer {
    /// Build a bucketizer from the chunk and page sizes of `config`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidConfig`] if `config` does not validate.
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(PageBucketizer {
            chunk_size: config.chunk_size,
            page_size: config.page_size,
        })
    }

    /// Bucket the non-zero chunks of `data` by page group.
    #[must_use]
    pub fn bucketize(&self, data: &[u8]) -> PageBuckets {
        let mut buckets = PageBuckets::default();
        for (index, chunk) in data.chunks(self.chunk_size).enumerate() {
            if chunk.iter().any(|&b| b != 0) {
                buckets.bump(index * self.chunk_size / self.page_size);
            }
        }
        buckets
    }

    /// Check whether `len` is a whole number of chunks.
    #[must_use]
    pub fn length_mismatch(&self, len: usize) -> Option<LengthMismatch> {
        if len % self.chunk_size == 0 {
            None
        } else {
            Some(LengthMismatch {
                len,
                chunk_size: self.chunk_size,
            })
        }
    }
}
