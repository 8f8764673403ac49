//! Structured output of one register-summary block.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key under which the nested VRAM block distribution is emitted.
pub const DISTRIBUTION_KEY: &str = "VRAM block distribution";

/// Key under which the frame index is emitted.
pub const FRAME_KEY: &str = "frame";

/// Fields and bucket entries extracted from a block, before a frame is attached.
///
/// Both collections keep first-insertion order. Inserting an existing key replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockFields {
    fields: Vec<(String, String)>,
    distribution: Vec<(String, u64)>,
}

impl BlockFields {
    /// Create an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `label = value`.
    pub fn insert_field(&mut self, label: &str, value: &str) {
        upsert(&mut self.fields, label, value.to_string());
    }

    /// Record a distribution bucket. `label` is the full `0xNNNN` text.
    pub fn insert_bucket(&mut self, label: String, count: u64) {
        match self.distribution.iter_mut().find(|(key, _)| *key == label) {
            Some((_, existing)) => *existing = count,
            None => self.distribution.push((label, count)),
        }
    }

    /// Attach the frame index the block was collected under.
    #[must_use]
    pub fn with_frame(self, frame: u64) -> ParsedRecord {
        ParsedRecord {
            frame,
            fields: self.fields,
            distribution: self.distribution,
        }
    }

    /// Value of the field `label`, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        lookup(&self.fields, label)
    }

    /// Number of flat fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if neither fields nor buckets were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.distribution.is_empty()
    }

    /// Distribution buckets in insertion order.
    #[must_use]
    pub fn distribution(&self) -> &[(String, u64)] {
        &self.distribution
    }
}

/// One extracted register summary.
///
/// Serializes to a flat JSON object: every field in insertion order, then
/// `"VRAM block distribution"` when at least one bucket was parsed, then `"frame"`. A field
/// whose label collides with one of those two keys is shadowed by it.
///
/// ```rust
/// use dumpscope::summary::extract;
///
/// let log = "━━━━ REGISTER SUMMARY @ Frame 60 ━━━━\n  BG mode:    1\n━━━━━━━━━━━━\n";
/// let records = extract(log);
///
/// assert_eq!(records[0].frame(), 60);
/// assert_eq!(records[0].get("BG mode"), Some("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    frame: u64,
    fields: Vec<(String, String)>,
    distribution: Vec<(String, u64)>,
}

impl ParsedRecord {
    /// Frame index taken from the block's start marker.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Value of the field `label`, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        lookup(&self.fields, label)
    }

    /// All fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The nested VRAM block distribution, `None` when the block had no bucket table.
    #[must_use]
    pub fn distribution(&self) -> Option<&[(String, u64)]> {
        if self.distribution.is_empty() {
            None
        } else {
            Some(&self.distribution)
        }
    }

    /// Count for a single distribution bucket such as `"0x0800"`.
    #[must_use]
    pub fn bucket(&self, label: &str) -> Option<u64> {
        self.distribution
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, count)| *count)
    }
}

fn upsert(entries: &mut Vec<(String, String)>, key: &str, value: String) {
    match entries.iter_mut().find(|(existing, _)| existing == key) {
        Some((_, slot)) => *slot = value,
        None => entries.push((key.to_string(), value)),
    }
}

fn lookup<'a>(entries: &'a [(String, String)], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|(existing, _)| existing == key)
        .map(|(_, value)| value.as_str())
}

struct Buckets<'a>(&'a [(String, u64)]);

impl Serialize for Buckets<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, count) in self.0 {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

impl Serialize for ParsedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_distribution = !self.distribution.is_empty();
        let shadowed = |label: &str| {
            label == FRAME_KEY || (has_distribution && label == DISTRIBUTION_KEY)
        };

        let mut map = serializer.serialize_map(None)?;
        for (label, value) in &self.fields {
            if !shadowed(label.as_str()) {
                map.serialize_entry(label, value)?;
            }
        }
        if has_distribution {
            map.serialize_entry(DISTRIBUTION_KEY, &Buckets(&self.distribution))?;
        }
        map.serialize_entry(FRAME_KEY, &self.frame)?;
        map.end()
    }
}
