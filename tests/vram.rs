//! Integration tests for VRAM snapshot analysis, loading dumps from disk the way the
//! command line tool does.

use dumpscope::vram::{scan_ranges, AnalysisConfig, NonZeroRange, PageBucketizer, VramAnalyzer};
use dumpscope::{Dump, Error};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

/// 64KB snapshot with tile data at 0x0000, a tilemap at 0x7800 and a stray byte at 0xFFFF.
fn snapshot() -> Vec<u8> {
    let mut data = vec![0u8; 0x10000];
    for (i, byte) in data[..0x400].iter_mut().enumerate() {
        *byte = (i % 255) as u8 + 1;
    }
    data[0x7800..0x7840].fill(0x21);
    data[0xFFFF] = 0x80;
    data
}

#[test]
fn ranges_of_reference_buffer() {
    let ranges = scan_ranges(&[0x00, 0x00, 0x05, 0x06, 0x00, 0x07, 0x00]);
    let pairs: Vec<(usize, usize)> = ranges.into_iter().map(Into::into).collect();
    assert_eq!(pairs, vec![(2, 4), (5, 6)]);
}

#[test]
fn empty_and_zero_buffers_have_no_ranges() {
    assert!(scan_ranges(&[]).is_empty());
    assert!(scan_ranges(&[0u8; 4096]).is_empty());
}

#[test]
fn third_chunk_lands_in_first_page() {
    let mut data = vec![0u8; 2048];
    data[1024] = 1;
    let buckets = PageBucketizer::new(&AnalysisConfig::default())
        .unwrap()
        .bucketize(&data);
    assert_eq!(buckets.iter().collect::<Vec<_>>(), vec![(0, 1)]);
}

#[test]
fn analyze_dump_from_disk() {
    let file = write_temp(&snapshot());
    let dump = Dump::from_file(file.path()).unwrap();
    assert_eq!(dump.len(), 0x10000);

    let report = VramAnalyzer::new(AnalysisConfig::default())
        .unwrap()
        .analyze(dump.data());

    assert_eq!(report.size, 0x10000);
    assert!(report.length_mismatch.is_none());
    assert_eq!(report.range_count, 3);
    assert_eq!(
        report.ranges,
        vec![
            NonZeroRange {
                start: 0,
                end: 0x400
            },
            NonZeroRange {
                start: 0x7800,
                end: 0x7840
            },
            NonZeroRange {
                start: 0xFFFF,
                end: 0x10000
            },
        ]
    );

    // 0x0000..0x0400 covers two 512B chunks of page 0; 0x7800 is page 0x0F; 0xFFFF is page 0x1F.
    assert_eq!(
        report.pages.iter().collect::<Vec<_>>(),
        vec![(0x00, 2), (0x0F, 1), (0x1F, 1)]
    );

    assert_eq!(report.content.non_zero_bytes, 0x400 + 0x40 + 1);
    let labels: Vec<String> = report.distribution.iter().map(|b| b.label()).collect();
    assert_eq!(labels, vec!["0x0000", "0x3800", "0x7800"]);
}

#[test]
fn window_offsets_are_relative() {
    let dump = Dump::from_mem(snapshot());
    let window = dump.window(Some(0x7000), Some(0x1000)).unwrap();

    let report = VramAnalyzer::new(AnalysisConfig::default())
        .unwrap()
        .analyze(window);
    assert_eq!(report.size, 0x1000);
    assert_eq!(
        report.ranges,
        vec![NonZeroRange {
            start: 0x800,
            end: 0x840
        }]
    );
    assert_eq!(report.pages.get(1), Some(1));
}

#[test]
fn window_past_end_is_out_of_bounds() {
    let dump = Dump::from_mem(vec![0u8; 0x100]);
    assert!(matches!(
        dump.window(Some(0x80), Some(0x100)),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        dump.window(Some(0x200), None),
        Err(Error::OutOfBounds)
    ));
}

#[test]
fn unaligned_dump_is_still_analyzed() {
    let mut data = vec![0u8; 0x900];
    data[0x8FF] = 3;
    let file = write_temp(&data);
    let dump = Dump::from_file(file.path()).unwrap();

    let report = VramAnalyzer::new(AnalysisConfig::default())
        .unwrap()
        .analyze(dump.data());
    let mismatch = report.length_mismatch.unwrap();
    assert_eq!(mismatch.remainder(), 0x100);
    assert_eq!(
        mismatch.to_string(),
        "VRAM dump length 0x900 not multiple of chunk 0x200"
    );
    assert_eq!(report.pages.get(1), Some(1));
}

#[test]
fn empty_dump_file_is_all_zero() {
    let file = write_temp(&[]);
    let dump = Dump::from_file(file.path()).unwrap();
    assert!(dump.is_empty());

    let report = VramAnalyzer::new(AnalysisConfig::default())
        .unwrap()
        .analyze(dump.data());
    assert!(report.is_all_zero());
    assert!(report.pages.is_empty());
    assert!(report.length_mismatch.is_none());
}

#[test]
fn analysis_is_idempotent() {
    let data = snapshot();
    let analyzer = VramAnalyzer::new(AnalysisConfig::default()).unwrap();
    assert_eq!(analyzer.analyze(&data), analyzer.analyze(&data));
}

#[test]
fn zero_sizes_are_rejected() {
    let result = VramAnalyzer::new(AnalysisConfig::default().with_chunk_size(0));
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn missing_dump_is_a_file_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Dump::from_file(dir.path().join("absent.vram")),
        Err(Error::FileError(_))
    ));
}
