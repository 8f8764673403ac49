//! Contiguous non-zero spans of a byte buffer.

use std::ops::Range;

use serde::Serialize;

/// Half-open span `[start, end)` of non-zero bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NonZeroRange {
    /// Offset of the first non-zero byte
    pub start: usize,
    /// Offset one past the last non-zero byte
    pub end: usize,
}

impl NonZeroRange {
    /// Number of bytes covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes. Scanned spans never do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a standard range, for slicing.
    #[must_use]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<NonZeroRange> for (usize, usize) {
    fn from(range: NonZeroRange) -> Self {
        (range.start, range.end)
    }
}

/// Lazy iterator over the maximal non-zero spans of a buffer, in ascending order.
///
/// Each byte is visited once across the whole iteration.
#[derive(Debug, Clone)]
pub struct NonZeroRanges<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> NonZeroRanges<'a> {
    /// Start scanning `data` from offset zero.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        NonZeroRanges { data, pos: 0 }
    }
}

impl Iterator for NonZeroRanges<'_> {
    type Item = NonZeroRange;

    fn next(&mut self) -> Option<NonZeroRange> {
        let rest = self.data.get(self.pos..)?;
        let start = self.pos + rest.iter().position(|&b| b != 0)?;
        let end = self.data[start..]
            .iter()
            .position(|&b| b == 0)
            .map_or(self.data.len(), |len| start + len);

        self.pos = end;
        Some(NonZeroRange { start, end })
    }
}

/// Collect every non-zero span of `data`.
///
/// An empty or all-zero buffer yields an empty list.
///
/// ```rust
/// use dumpscope::vram::scan_ranges;
///
/// let ranges: Vec<(usize, usize)> = scan_ranges(b"\x00\x00\x05\x06\x00\x07\x00")
///     .into_iter()
///     .map(Into::into)
///     .collect();
/// assert_eq!(ranges, [(2, 4), (5, 6)]);
/// ```
#[must_use]
pub fn scan_ranges(data: &[u8]) -> Vec<NonZeroRange> {
    NonZeroRanges::new(data).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(data: &[u8]) -> Vec<(usize, usize)> {
        scan_ranges(data).into_iter().map(Into::into).collect()
    }

    #[test]
    fn spans_between_zeros() {
        assert_eq!(
            pairs(&[0x00, 0x00, 0x05, 0x06, 0x00, 0x07, 0x00]),
            vec![(2, 4), (5, 6)]
        );
    }

    #[test]
    fn empty_and_all_zero() {
        assert!(scan_ranges(&[]).is_empty());
        assert!(scan_ranges(&[0; 64]).is_empty());
    }

    #[test]
    fn span_running_to_end() {
        assert_eq!(pairs(&[0, 1, 2, 3]), vec![(1, 4)]);
        assert_eq!(pairs(&[9, 9]), vec![(0, 2)]);
        assert_eq!(pairs(&[0xFF]), vec![(0, 1)]);
    }

    #[test]
    fn single_byte_spans() {
        assert_eq!(pairs(&[1, 0, 1, 0, 1]), vec![(0, 1), (2, 3), (4, 5)]);
    }

    #[test]
    fn ranges_are_sorted_and_disjoint() {
        let data: Vec<u8> = (0..4096u32).map(|i| ((i * 7) % 5) as u8).collect();
        let ranges = scan_ranges(&data);

        for pair in ranges.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
        for range in &ranges {
            assert!(!range.is_empty());
            assert!(data[range.as_range()].iter().all(|&b| b != 0));
        }
        let covered: usize = ranges.iter().map(NonZeroRange::len).sum();
        assert_eq!(covered, data.iter().filter(|&&b| b != 0).count());
    }

    #[test]
    fn iterator_is_lazy() {
        let mut iter = NonZeroRanges::new(&[0, 3, 0, 4, 4]);
        assert_eq!(iter.next(), Some(NonZeroRange { start: 1, end: 2 }));
        assert_eq!(iter.next(), Some(NonZeroRange { start: 3, end: 5 }));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
