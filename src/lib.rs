// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(clippy::cast_precision_loss)]
//! # dumpscope
//!
//! Structured diagnostics from emulator debug artifacts.
//!
//! `dumpscope` turns the two raw artifacts an emulator debugging session leaves behind into
//! data that can be compared, graphed or diffed by other tools:
//!
//! - **Register-summary logs** - text logs in which the emulator periodically prints a
//!   framed block of PPU register state. Each block becomes a [`summary::ParsedRecord`].
//! - **VRAM snapshots** - raw video memory dumps. The analyzer reports where non-zero data
//!   lives, from exact byte ranges down to per-page activity counts, in a
//!   [`vram::VramReport`].
//!
//! The two pipelines are independent and share no state. Both are synchronous single-pass
//! transformations over input loaded once.
//!
//! # Architecture
//!
//! - [`file`] - loading of snapshots (memory-mapped) and logs
//! - [`summary`] - line classification, block scanning and field parsing for logs
//! - [`vram`] - range scanning, page bucketing and content statistics for snapshots
//! - [`utils`] - offset parsing shared with the command line tool
//!
//! # Quick Start
//!
//! ## Extracting register summaries
//!
//! ```rust,no_run
//! use dumpscope::summary;
//!
//! let records = summary::extract_from_path("emulator.log")?;
//! for record in &records {
//!     println!("frame {}: INIDISP={:?}", record.frame(), record.get("INIDISP"));
//! }
//! println!("{}", summary::to_json(&records)?);
//! # Ok::<(), dumpscope::Error>(())
//! ```
//!
//! ## Analyzing a VRAM snapshot
//!
//! ```rust,no_run
//! use dumpscope::{file::Dump, vram::{AnalysisConfig, VramAnalyzer}};
//!
//! let dump = Dump::from_file("snapshot.vram")?;
//! let analyzer = VramAnalyzer::new(AnalysisConfig::default())?;
//! let report = analyzer.analyze(dump.data());
//!
//! println!("size: {} bytes", report.size);
//! for range in &report.ranges {
//!     println!("  {:#06x} .. {:#06x} ({} bytes)", range.start, range.end, range.len());
//! }
//! # Ok::<(), dumpscope::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Only obtaining the input and invalid configuration can fail. Everything a log or dump
//! can contain is handled without an error: unknown lines are skipped, malformed frame
//! markers are ignored, and an unaligned dump length is reported as a diagnostic.
//!
//! ```rust,no_run
//! use dumpscope::{summary, Error};
//!
//! match summary::extract_from_path("missing.log") {
//!     Ok(records) => println!("{} records", records.len()),
//!     Err(Error::FileError(io)) => eprintln!("cannot read log: {io}"),
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// ```rust
/// use dumpscope::prelude::*;
///
/// let records = extract("");
/// assert!(records.is_empty());
/// let report = VramAnalyzer::new(AnalysisConfig::default())?.analyze(&[]);
/// assert!(report.is_all_zero());
/// # Ok::<(), dumpscope::Error>(())
/// ```
pub mod prelude;

/// Input loading for snapshots and logs.
pub mod file;

/// Register-summary extraction from emulator logs.
pub mod summary;

/// Activity analysis of raw VRAM snapshots.
pub mod vram;

/// Parsing helpers shared with the command line tool.
pub mod utils;

/// `dumpscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`crate::Error`]. This is used consistently throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// `dumpscope` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

pub use file::Dump;
pub use summary::ParsedRecord;
pub use vram::{AnalysisConfig, VramAnalyzer, VramReport};
