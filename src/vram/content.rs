//! Byte-level content statistics and the word-addressed block distribution.
//!
//! The emulator's register summary reports VRAM usage as a non-zero byte count and a
//! distribution over 4KB blocks keyed by *word* address. Computing the same figures from a
//! dump lets the two artifacts be lined up against each other: a block labelled `0x0800`
//! here is the bucket `0x0800` in the summary's `VRAM block distribution`.

use serde::Serialize;

/// One non-zero byte observed in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sample {
    /// Byte offset
    pub offset: usize,
    /// Byte value
    pub value: u8,
}

/// Aggregate content figures of a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    /// Number of non-zero bytes
    pub non_zero_bytes: usize,
    /// Number of distinct non-zero byte values
    pub unique_values: usize,
    /// The first non-zero bytes, in offset order
    pub samples: Vec<Sample>,
}

impl ContentStats {
    /// Scan `data`, keeping at most `sample_limit` samples.
    #[must_use]
    pub fn collect(data: &[u8], sample_limit: usize) -> Self {
        let mut seen = [false; 256];
        let mut stats = ContentStats::default();

        for (offset, &value) in data.iter().enumerate() {
            if value == 0 {
                continue;
            }
            stats.non_zero_bytes += 1;
            if !seen[usize::from(value)] {
                seen[usize::from(value)] = true;
                stats.unique_values += 1;
            }
            if stats.samples.len() < sample_limit {
                stats.samples.push(Sample { offset, value });
            }
        }

        stats
    }

    /// Non-zero bytes as a percentage of `total`.
    #[must_use]
    pub fn usage_percent(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.non_zero_bytes as f64 * 100.0 / total as f64
        }
    }
}

/// Non-zero byte count of one distribution block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockUsage {
    /// Word address of the block start (byte offset / 2)
    pub word_address: usize,
    /// Non-zero bytes inside the block
    pub non_zero_bytes: usize,
}

impl BlockUsage {
    /// The `0xNNNN` label used for this block in register summaries.
    #[must_use]
    pub fn label(&self) -> String {
        format!("0x{:04X}", self.word_address)
    }
}

/// Count non-zero bytes per `block_size` block.
///
/// Only whole blocks are considered, and blocks without any non-zero byte are omitted.
/// A zero `block_size` yields an empty distribution.
#[must_use]
pub fn block_distribution(data: &[u8], block_size: usize) -> Vec<BlockUsage> {
    if block_size == 0 {
        return Vec::new();
    }

    data.chunks_exact(block_size)
        .enumerate()
        .filter_map(|(index, block)| {
            let non_zero_bytes = block.iter().filter(|&&b| b != 0).count();
            (non_zero_bytes > 0).then(|| BlockUsage {
                word_address: index * block_size / 2,
                non_zero_bytes,
            })
        })
        .collect()
}
