//! Activity analysis of raw VRAM snapshots.
//!
//! A snapshot is an opaque byte buffer; the analysis only asks where the non-zero bytes
//! are. It answers at three resolutions:
//!
//! - [`scan_ranges`] / [`NonZeroRanges`] - exact maximal spans of non-zero bytes
//! - [`PageBucketizer`] - non-zero 512-byte chunks counted per 2KB page group
//! - [`block_distribution`] - non-zero bytes per 4KB block, keyed by word address
//!
//! [`VramAnalyzer`] runs all of them under one [`AnalysisConfig`] and returns a
//! [`VramReport`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use dumpscope::{file::Dump, vram::{AnalysisConfig, VramAnalyzer}};
//!
//! let dump = Dump::from_file("dumps/frame_120.vram")?;
//! let report = VramAnalyzer::new(AnalysisConfig::default())?.analyze(dump.data());
//!
//! for (page, chunks) in report.pages.iter() {
//!     println!("page {page:#04x}: {chunks} non-zero 512B chunks");
//! }
//! # Ok::<(), dumpscope::Error>(())
//! ```

mod config;
mod content;
mod pages;
mod ranges;
mod report;

pub use config::{
    AnalysisConfig, DEFAULT_BLOCK_SIZE, DEFAULT_CHUNK_SIZE, DEFAULT_PAGE_SIZE,
    DEFAULT_PREVIEW_LIMIT, DEFAULT_SAMPLE_LIMIT,
};
pub use content::{block_distribution, BlockUsage, ContentStats, Sample};
pub use pages::{LengthMismatch, PageBucketizer, PageBuckets};
pub use ranges::{scan_ranges, NonZeroRange, NonZeroRanges};
pub use report::{VramAnalyzer, VramReport};
