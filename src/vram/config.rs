//! Parameters of the VRAM analysis.

use serde::Serialize;

use crate::{Error, Result};

/// Size of the windows sampled for activity (256 VRAM words).
pub const DEFAULT_CHUNK_SIZE: usize = 0x200;

/// Size of one page group, four chunks.
pub const DEFAULT_PAGE_SIZE: usize = 0x800;

/// Number of non-zero ranges shown in previews.
pub const DEFAULT_PREVIEW_LIMIT: usize = 8;

/// Block size of the word-addressed distribution, matching the emulator's own summary.
pub const DEFAULT_BLOCK_SIZE: usize = 0x1000;

/// Number of `(offset, value)` samples kept by the content statistics.
pub const DEFAULT_SAMPLE_LIMIT: usize = 20;

/// Configuration for [`crate::vram::VramAnalyzer`].
///
/// # Examples
///
/// ```rust
/// use dumpscope::vram::AnalysisConfig;
///
/// // Small geometry for a synthetic 64-byte buffer
/// let config = AnalysisConfig::default()
///     .with_chunk_size(8)
///     .with_page_size(32)
///     .with_preview_limit(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisConfig {
    /// Bytes per sampled chunk
    pub chunk_size: usize,
    /// Bytes per page group
    pub page_size: usize,
    /// Non-zero ranges kept for display
    pub preview_limit: usize,
    /// Bytes per distribution block
    pub block_size: usize,
    /// Content samples kept
    pub sample_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            chunk_size: DEFAULT_CHUNK_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            block_size: DEFAULT_BLOCK_SIZE,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

impl AnalysisConfig {
    /// Set the chunk size.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the page-group size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the number of previewed ranges.
    #[must_use]
    pub fn with_preview_limit(mut self, preview_limit: usize) -> Self {
        self.preview_limit = preview_limit;
        self
    }

    /// Set the distribution block size.
    #[must_use]
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Set the number of content samples.
    #[must_use]
    pub fn with_sample_limit(mut self, sample_limit: usize) -> Self {
        self.sample_limit = sample_limit;
        self
    }

    /// Check that every size is usable.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if the chunk, page or block size is zero.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("chunk size", self.chunk_size),
            ("page size", self.page_size),
            ("block size", self.block_size),
        ] {
            if value == 0 {
                return Err(Error::InvalidConfig(format!("{name} must be non-zero")));
            }
        }
        Ok(())
    }
}
