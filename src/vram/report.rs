//! Combined analysis of a VRAM snapshot.

use serde::Serialize;

use crate::{
    vram::{
        block_distribution, AnalysisConfig, BlockUsage, ContentStats, LengthMismatch,
        NonZeroRange, NonZeroRanges, PageBucketizer, PageBuckets,
    },
    Result,
};

/// Everything learned from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VramReport {
    /// Total buffer length in bytes
    pub size: usize,
    /// Set when `size` is not a whole number of chunks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_mismatch: Option<LengthMismatch>,
    /// Number of maximal non-zero ranges
    pub range_count: usize,
    /// The first ranges, up to the configured preview limit
    pub ranges: Vec<NonZeroRange>,
    /// Non-zero chunk counts per page group
    pub pages: PageBuckets,
    /// Byte-level statistics
    pub content: ContentStats,
    /// Non-zero bytes per word-addressed block
    pub distribution: Vec<BlockUsage>,
}

impl VramReport {
    /// Returns true if the buffer holds no non-zero byte.
    #[must_use]
    pub fn is_all_zero(&self) -> bool {
        self.range_count == 0
    }
}

/// Runs the range scan, page bucketing and content statistics over a snapshot.
///
/// # Examples
///
/// ```rust
/// use dumpscope::vram::{AnalysisConfig, VramAnalyzer};
///
/// let analyzer = VramAnalyzer::new(AnalysisConfig::default())?;
/// let report = analyzer.analyze(b"\x00\x00\x05\x06\x00\x07\x00");
///
/// assert_eq!(report.size, 7);
/// assert!(report.length_mismatch.is_some());
/// assert_eq!(report.range_count, 2);
/// assert_eq!(report.pages.get(0), Some(1));
/// # Ok::<(), dumpscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct VramAnalyzer {
    config: AnalysisConfig,
    bucketizer: PageBucketizer,
}

impl VramAnalyzer {
    /// Create an analyzer for `config`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidConfig`] if `config` does not validate.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        Ok(VramAnalyzer {
            bucketizer: PageBucketizer::new(&config)?,
            config,
        })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze `data`.
    #[must_use]
    pub fn analyze(&self, data: &[u8]) -> VramReport {
        let length_mismatch = self.bucketizer.length_mismatch(data.len());
        if let Some(mismatch) = &length_mismatch {
            log::debug!("{mismatch}");
        }

        let mut range_count = 0;
        let mut ranges = Vec::new();
        for range in NonZeroRanges::new(data) {
            if range_count < self.config.preview_limit {
                ranges.push(range);
            }
            range_count += 1;
        }

        VramReport {
            size: data.len(),
            length_mismatch,
            range_count,
            ranges,
            pages: self.bucketizer.bucketize(data),
            content: ContentStats::collect(data, self.config.sample_limit),
            distribution: block_distribution(data, self.config.block_size),
        }
    }
}
