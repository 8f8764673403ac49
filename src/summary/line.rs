//! Line classification for register-summary logs.
//!
//! Every raw log line is classified exactly once into a [`LineKind`]. Both the block scanner
//! and the field parser dispatch on that classification instead of re-matching text, so the
//! shapes recognized here are the whole contract with the emulator's log format:
//!
//! ```text
//! ━━━━ REGISTER SUMMARY @ Frame 120 ━━━━              StartMarker(120)
//!   INIDISP:    0x0F (blank=OFF brightness=15)        Field
//!     └─ Distribution by 4KB blocks (word addresses): SectionHeader
//!        0x0000: 4096 bytes                           BucketEntry
//! ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━                    Terminator
//! ```
//!
//! Classification is context free. Whether a `Terminator` or `BucketEntry` means anything
//! depends on the state of the caller.

/// Text preceding the frame id of a start marker.
pub const START_MARKER_PREFIX: &str = "━━━━ REGISTER SUMMARY @ Frame ";

/// Text following the frame id of a start marker.
pub const START_MARKER_SUFFIX: &str = " ━━━━";

/// Number of leading `━` glyphs that make a line a block terminator.
pub const TERMINATOR_RULE_LEN: usize = 8;

/// Substring that opens the nested VRAM distribution table.
pub const DISTRIBUTION_HEADER: &str = "Distribution by 4KB blocks";

const RULE_GLYPH: char = '━';
const FIELD_INDENT: usize = 2;
const BUCKET_INDENT: usize = 7;
const BUCKET_SUFFIX: &str = " bytes";

/// The classification of a single log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `━━━━ REGISTER SUMMARY @ Frame <N> ━━━━` with a valid decimal frame id.
    StartMarker(u64),
    /// A start marker whose frame id is not a valid non-negative integer.
    MalformedMarker,
    /// A rule of at least [`TERMINATOR_RULE_LEN`] `━` glyphs.
    Terminator,
    /// Two-space indented `label: value` line. Both parts are trimmed.
    Field {
        /// Register or statistic name
        label: &'a str,
        /// Verbatim value text
        value: &'a str,
    },
    /// Seven-space indented `0xNNNN: <count> bytes` line.
    BucketEntry {
        /// Four uppercase hex digits, without the `0x` prefix
        address: &'a str,
        /// Byte count for the bucket
        count: u64,
    },
    /// A line containing [`DISTRIBUTION_HEADER`].
    SectionHeader,
    /// A line made only of box-drawing glyphs and whitespace.
    Border,
    /// Tree-drawn annotation such as `└─ Tile data @ 0x0000: 512 nonzero bytes`.
    Annotation,
    /// Anything else.
    Unrecognized,
}

/// Classify one line. Line terminators must already be stripped.
///
/// Checks run from the most specific shape to the least, so a distribution header drawn
/// with a leading `└─` is still a [`LineKind::SectionHeader`].
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(kind) = start_marker(line) {
        return kind;
    }
    if line.chars().take(TERMINATOR_RULE_LEN).filter(|c| *c == RULE_GLYPH).count()
        == TERMINATOR_RULE_LEN
    {
        return LineKind::Terminator;
    }
    if line.contains(DISTRIBUTION_HEADER) {
        return LineKind::SectionHeader;
    }
    if let Some(kind) = decoration(line) {
        return kind;
    }
    if let Some(kind) = bucket_entry(line) {
        return kind;
    }
    if let Some(kind) = field(line) {
        return kind;
    }

    LineKind::Unrecognized
}

fn start_marker(line: &str) -> Option<LineKind<'_>> {
    let id = line
        .strip_prefix(START_MARKER_PREFIX)?
        .strip_suffix(START_MARKER_SUFFIX)?;

    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Some(LineKind::MalformedMarker);
    }

    Some(match id.parse::<u64>() {
        Ok(frame) => LineKind::StartMarker(frame),
        Err(_) => LineKind::MalformedMarker,
    })
}

/// Border glyphs the emulator draws around and inside summaries.
fn is_box_drawing(c: char) -> bool {
    ('\u{2500}'..='\u{257F}').contains(&c)
}

fn decoration(line: &str) -> Option<LineKind<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed
        .chars()
        .all(|c| is_box_drawing(c) || c.is_whitespace())
    {
        Some(LineKind::Border)
    } else if trimmed.starts_with("└─") || trimmed.starts_with('┌') {
        Some(LineKind::Annotation)
    } else {
        None
    }
}

/// Strips exactly `width` leading whitespace characters.
fn strip_indent(line: &str, width: usize) -> Option<&str> {
    let mut chars = line.char_indices();
    for _ in 0..width {
        let (_, c) = chars.next()?;
        if !c.is_whitespace() {
            return None;
        }
    }

    let rest = match chars.next() {
        Some((idx, c)) if !c.is_whitespace() => &line[idx..],
        _ => return None,
    };
    Some(rest)
}

fn bucket_entry(line: &str) -> Option<LineKind<'_>> {
    let rest = strip_indent(line, BUCKET_INDENT)?.strip_prefix("0x")?;

    let (address, rest) = rest.split_once(':')?;
    if address.len() != 4
        || !address
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
    {
        return None;
    }

    let count = rest.strip_suffix(BUCKET_SUFFIX)?;
    if !count.starts_with(char::is_whitespace) {
        return None;
    }
    let count = count.trim_start();
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(LineKind::BucketEntry {
        address,
        count: count.parse().ok()?,
    })
}

fn field(line: &str) -> Option<LineKind<'_>> {
    let rest = strip_indent(line, FIELD_INDENT)?;

    let (label, value) = rest.split_once(':')?;
    if label.trim().is_empty() {
        return None;
    }
    if !label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '(' || c == ')' || c.is_whitespace())
    {
        return None;
    }
    if !value.starts_with(char::is_whitespace) {
        return None;
    }

    Some(LineKind::Field {
        label: label.trim(),
        value: value.trim(),
    })
}
