//! Field extraction for the lines of a single block.

use crate::summary::{
    line::{classify, LineKind},
    record::BlockFields,
};

/// Parsing mode inside one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// `label: value` lines are recorded.
    Normal,
    /// Inside the distribution table opened by a section header.
    BucketTable,
}

/// Turns the raw lines of one block into [`BlockFields`].
///
/// The parser runs a two-mode machine. In `Normal` mode every [`LineKind::Field`] is
/// recorded. A [`LineKind::SectionHeader`] switches to `BucketTable` mode, where
/// [`LineKind::BucketEntry`] lines are collected into the distribution. The first line in
/// `BucketTable` mode that is neither a bucket entry, a header, nor decoration ends the
/// table, and that same line is then handled as a `Normal` line.
#[derive(Debug)]
pub struct BlockFieldParser {
    mode: Mode,
    fields: BlockFields,
}

impl Default for BlockFieldParser {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockFieldParser {
    /// Create a parser in `Normal` mode with no fields.
    #[must_use]
    pub fn new() -> Self {
        BlockFieldParser {
            mode: Mode::Normal,
            fields: BlockFields::new(),
        }
    }

    /// Parse a complete block in one call.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> BlockFields {
        let mut parser = Self::new();
        for line in lines {
            parser.push(line.as_ref());
        }
        parser.finish()
    }

    /// Feed the next line of the block.
    pub fn push(&mut self, line: &str) {
        self.dispatch(classify(line));
    }

    /// Returns true while the distribution table is open.
    #[must_use]
    pub fn in_bucket_table(&self) -> bool {
        self.mode == Mode::BucketTable
    }

    /// Consume the parser, returning everything recorded.
    #[must_use]
    pub fn finish(self) -> BlockFields {
        self.fields
    }

    fn dispatch(&mut self, kind: LineKind<'_>) {
        match (self.mode, kind) {
            (_, LineKind::Border | LineKind::Annotation) => {}
            (_, LineKind::SectionHeader) => {
                log::trace!("entering distribution table");
                self.mode = Mode::BucketTable;
            }
            (Mode::BucketTable, LineKind::BucketEntry { address, count }) => {
                self.fields.insert_bucket(format!("0x{address}"), count);
            }
            (Mode::BucketTable, other) => {
                log::trace!("leaving distribution table");
                self.mode = Mode::Normal;
                self.record(other);
            }
            (Mode::Normal, other) => self.record(other),
        }
    }

    fn record(&mut self, kind: LineKind<'_>) {
        if let LineKind::Field { label, value } = kind {
            self.fields.insert_field(label, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_fields() {
        let fields = BlockFieldParser::parse(&["  A: 1", "  B: two", "garbage", ""]);

        assert_eq!(fields.get("A"), Some("1"));
        assert_eq!(fields.get("B"), Some("two"));
        assert_eq!(fields.len(), 2);
        assert!(fields.distribution().is_empty());
    }

    #[test]
    fn bucket_table() {
        let fields = BlockFieldParser::parse(&[
            "  VRAM usage: 15/65536 bytes (0.0%)",
            "    └─ Distribution by 4KB blocks (word addresses):",
            "       0x0000:   12 bytes",
            "       0x0800:    3 bytes",
        ]);

        assert_eq!(
            fields.distribution(),
            &[("0x0000".to_string(), 12), ("0x0800".to_string(), 3)]
        );
        assert_eq!(fields.get("VRAM usage"), Some("15/65536 bytes (0.0%)"));
        // the header is never a field
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn line_ending_table_is_reevaluated() {
        let fields = BlockFieldParser::parse(&[
            "Distribution by 4KB blocks",
            "       0x1000:    7 bytes",
            "  CGRAM usage: 32/512 bytes (6.2%)",
            "       0x2000:    9 bytes",
        ]);

        // the field that closed the table is kept
        assert_eq!(fields.get("CGRAM usage"), Some("32/512 bytes (6.2%)"));
        // buckets after the table closed are not collected
        assert_eq!(fields.distribution(), &[("0x1000".to_string(), 7)]);
    }

    #[test]
    fn decoration_does_not_close_table() {
        let mut parser = BlockFieldParser::new();
        parser.push("    └─ Distribution by 4KB blocks (word addresses):");
        assert!(parser.in_bucket_table());
        parser.push("       0x0000:    1 bytes");
        parser.push("┌────┐");
        assert!(parser.in_bucket_table());
        parser.push("    └─ Tile data @ 0x0000: 512 nonzero bytes");
        assert!(parser.in_bucket_table());
        parser.push("       0x0800:    2 bytes");
        parser.push("");
        assert!(!parser.in_bucket_table());
        parser.push("       0x1000:    4 bytes");

        let fields = parser.finish();
        assert_eq!(fields.distribution().len(), 2);
    }

    #[test]
    fn bucket_lines_outside_table_are_ignored() {
        let fields = BlockFieldParser::parse(&["       0x0000:   12 bytes", "  A: 1"]);

        assert!(fields.distribution().is_empty());
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn decorated_lines_are_skipped() {
        let fields = BlockFieldParser::parse(&[
            "    └─ Tile data @ 0x0000: 512 nonzero bytes",
            "┌──────┐",
            "  OAM usage:  12/544 bytes (2.2%)",
        ]);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("OAM usage"), Some("12/544 bytes (2.2%)"));
    }
}
