//! Builders for synthetic emulator logs and snapshots.

use crate::summary::line::{START_MARKER_PREFIX, START_MARKER_SUFFIX};

/// Closing rule as printed by the emulator.
pub const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Assembles log text the way the emulator interleaves summaries with other output.
#[derive(Debug, Default)]
pub struct SummaryLog {
    lines: Vec<String>,
}

impl SummaryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arbitrary log output between summaries.
    pub fn noise(mut self, text: &str) -> Self {
        self.lines.push(format!("[cpu] {text}"));
        self
    }

    /// A start marker for `frame` followed by `body`, preceded by the blank line the
    /// emulator prints.
    pub fn block(mut self, frame: u64, body: &[&str]) -> Self {
        self.lines.push(String::new());
        self.lines
            .push(format!("{START_MARKER_PREFIX}{frame}{START_MARKER_SUFFIX}"));
        self.lines.extend(body.iter().map(|line| line.to_string()));
        self
    }

    /// The closing rule.
    pub fn terminate(mut self) -> Self {
        self.lines.push(RULE.to_string());
        self.lines.push(String::new());
        self
    }

    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// A 64KB snapshot with `value` written over each `[start, end)` span.
pub fn snapshot_with(spans: &[(usize, usize, u8)]) -> Vec<u8> {
    let mut data = vec![0u8; 0x10000];
    for &(start, end, value) in spans {
        data[start..end].fill(value);
    }
    data
}
