//! Register-summary extraction from emulator logs.
//!
//! The emulator periodically prints a block of PPU register state, framed by a start marker
//! carrying the frame number and a closing rule:
//!
//! ```text
//! ━━━━ REGISTER SUMMARY @ Frame 120 ━━━━
//!   INIDISP:    0x0F (blank=OFF brightness=15)
//!   BG mode:    1
//!   VRAM usage: 18432/65536 bytes (28.1%)
//!     └─ Distribution by 4KB blocks (word addresses):
//!        0x0000: 4096 bytes
//!        0x0800: 2048 bytes
//!   CGRAM usage: 256/512 bytes (50.0%)
//! ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//! ```
//!
//! Everything between blocks is ordinary log output and is skipped. Each closed block
//! becomes one [`ParsedRecord`] holding every `label: value` line verbatim plus the
//! distribution table, if the block contained one.
//!
//! # Key Components
//!
//! - [`line::classify`] - maps a raw line to a [`LineKind`]
//! - [`LogBlockScanner`] - the `Idle`/`Collecting` block state machine
//! - [`BlockFieldParser`] - the `Normal`/`BucketTable` field state machine
//! - [`ParsedRecord`] - one extracted summary, serializable to JSON
//!
//! # Examples
//!
//! ```rust
//! use dumpscope::summary::{extract, to_json};
//!
//! let log = "\
//! ━━━━ REGISTER SUMMARY @ Frame 7 ━━━━
//!   A: 1
//!   B: two
//! ━━━━━━━━━━━━━━━━
//! ";
//! let records = extract(log);
//! assert_eq!(records.len(), 1);
//! assert_eq!(
//!     to_json(&records)?,
//!     "[\n  {\n    \"A\": \"1\",\n    \"B\": \"two\",\n    \"frame\": 7\n  }\n]"
//! );
//! # Ok::<(), dumpscope::Error>(())
//! ```

mod block;
pub mod line;
mod record;
mod scanner;

use std::path::Path;

pub use block::BlockFieldParser;
pub use line::LineKind;
pub use record::{BlockFields, ParsedRecord, DISTRIBUTION_KEY, FRAME_KEY};
pub use scanner::LogBlockScanner;

use crate::{file::read_log, Result};

/// Extract every closed register-summary block from `text`.
///
/// Both `\n` and `\r\n` line endings are accepted.
#[must_use]
pub fn extract(text: &str) -> Vec<ParsedRecord> {
    extract_lines(text.lines())
}

/// Extract records from an iterator of lines without terminators.
pub fn extract_lines<'a, I>(lines: I) -> Vec<ParsedRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = LogBlockScanner::new();
    let records: Vec<ParsedRecord> = lines
        .into_iter()
        .filter_map(|line| scanner.push(line))
        .collect();
    scanner.finish();

    log::debug!("extracted {} register summaries", records.len());
    records
}

/// Read the log at `path` and extract its records.
///
/// # Errors
/// Returns [`crate::Error::FileError`] if the log cannot be read.
pub fn extract_from_path(path: impl AsRef<Path>) -> Result<Vec<ParsedRecord>> {
    let text = read_log(path)?;
    Ok(extract(&text))
}

/// Render records as a pretty-printed JSON array with two-space indentation.
///
/// # Errors
/// Returns [`crate::Error::Json`] if serialization fails.
pub fn to_json(records: &[ParsedRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
