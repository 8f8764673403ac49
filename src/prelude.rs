//! # dumpscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! dumpscope library. Import it to get quick access to both extraction pipelines.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dumpscope operations
pub use crate::Error;

/// The result type used throughout dumpscope
pub use crate::Result;

// ================================================================================================
// Input
// ================================================================================================

/// A loaded VRAM snapshot and the log reader
pub use crate::file::{read_log, Dump};

// ================================================================================================
// Register Summaries
// ================================================================================================

/// Block scanning, field parsing and the extracted record
pub use crate::summary::{
    extract, extract_from_path, to_json, BlockFieldParser, LineKind, LogBlockScanner,
    ParsedRecord,
};

// ================================================================================================
// VRAM Analysis
// ================================================================================================

/// Analyzer, configuration and report
pub use crate::vram::{AnalysisConfig, VramAnalyzer, VramReport};

/// Individual analysis components
pub use crate::vram::{scan_ranges, NonZeroRange, PageBucketizer, PageBuckets};
