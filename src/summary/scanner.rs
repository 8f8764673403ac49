//! Splitting a log stream into per-frame blocks.

use crate::summary::{
    block::BlockFieldParser,
    line::{classify, LineKind},
    record::ParsedRecord,
};

/// Scanner state.
#[derive(Debug, Default)]
enum ScanState {
    /// No open block; everything but start markers is ignored.
    #[default]
    Idle,
    /// A block is open for `frame` and accumulating `lines`.
    Collecting { frame: u64, lines: Vec<String> },
}

/// Drives [`BlockFieldParser`] over the register-summary blocks of a log.
///
/// Lines are fed one at a time with [`LogBlockScanner::push`], which returns a record
/// whenever a block is closed. A block closes on a terminator rule or on the start marker
/// of the next block, and only produces a record if it accumulated at least one line.
///
/// A block that is still open when the input ends is discarded by
/// [`LogBlockScanner::finish`]. Truncated logs therefore never yield a partial record
/// for their last frame.
///
/// # Examples
///
/// ```rust
/// use dumpscope::summary::LogBlockScanner;
///
/// let mut scanner = LogBlockScanner::new();
/// assert!(scanner.push("━━━━ REGISTER SUMMARY @ Frame 60 ━━━━").is_none());
/// assert!(scanner.push("  BG mode:    1").is_none());
///
/// let record = scanner.push("━━━━━━━━━━━━━━━━").unwrap();
/// assert_eq!(record.frame(), 60);
/// assert_eq!(record.get("BG mode"), Some("1"));
/// ```
#[derive(Debug, Default)]
pub struct LogBlockScanner {
    state: ScanState,
}

impl LogBlockScanner {
    /// Create a scanner in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame of the currently open block, if any.
    #[must_use]
    pub fn open_frame(&self) -> Option<u64> {
        match &self.state {
            ScanState::Idle => None,
            ScanState::Collecting { frame, .. } => Some(*frame),
        }
    }

    /// Feed one line. Returns the record of a block this line closed.
    pub fn push(&mut self, line: &str) -> Option<ParsedRecord> {
        match classify(line) {
            LineKind::StartMarker(frame) => {
                let previous = std::mem::replace(
                    &mut self.state,
                    ScanState::Collecting {
                        frame,
                        lines: Vec::new(),
                    },
                );
                Self::close(previous)
            }
            LineKind::MalformedMarker => {
                log::debug!("ignoring start marker with invalid frame id: {line}");
                None
            }
            LineKind::Terminator => Self::close(std::mem::take(&mut self.state)),
            LineKind::Border => None,
            _ => {
                if let ScanState::Collecting { lines, .. } = &mut self.state {
                    lines.push(line.to_string());
                }
                None
            }
        }
    }

    /// End of input. An open block is dropped without producing a record.
    pub fn finish(self) {
        if let ScanState::Collecting { frame, lines } = self.state {
            log::debug!(
                "discarding unterminated block for frame {frame} ({} lines)",
                lines.len()
            );
        }
    }

    fn close(state: ScanState) -> Option<ParsedRecord> {
        match state {
            ScanState::Collecting { frame, lines } if !lines.is_empty() => {
                Some(BlockFieldParser::parse(&lines).with_frame(frame))
            }
            _ => None,
        }
    }
}
