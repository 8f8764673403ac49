use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use dumpscope::{
    summary,
    vram::{scan_ranges, AnalysisConfig, VramAnalyzer},
};
use std::{fmt::Write, hint::black_box};

/// A log of `frames` summaries, each followed by a burst of CPU trace lines.
fn synthetic_log(frames: u64) -> String {
    let mut log = String::new();
    for frame in 0..frames {
        for pc in 0..40u32 {
            let _ = writeln!(log, "[cpu] 00:{:04X} LDA #$00", 0x8000 + pc * 2);
        }
        let _ = writeln!(log, "━━━━ REGISTER SUMMARY @ Frame {frame} ━━━━");
        let _ = writeln!(log, "  INIDISP: 0x0F");
        let _ = writeln!(log, "  BGMODE: 0x01");
        let _ = writeln!(log, "  VRAM usage: {} non-zero bytes", frame * 16);
        let _ = writeln!(log, "  ┌─ VRAM");
        let _ = writeln!(log, "    └─ Distribution by 4KB blocks (word addresses):");
        for block in 0..8 {
            let _ = writeln!(log, "       0x{:04X}: {} bytes", block * 0x800, frame % 4096);
        }
        let _ = writeln!(log, "  TM: 0x11");
        let _ = writeln!(log, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }
    log
}

/// 64KB of VRAM with alternating populated and empty 256 byte stripes.
fn synthetic_vram() -> Vec<u8> {
    (0..0x10000usize)
        .map(|i| if (i / 0x100) % 2 == 0 { (i % 251) as u8 } else { 0 })
        .collect()
}

fn bench_summary(c: &mut Criterion) {
    let log = synthetic_log(600);

    let mut group = c.benchmark_group("summary");
    group.throughput(Throughput::Bytes(log.len() as u64));
    group.bench_function("extract", |b| {
        b.iter(|| black_box(summary::extract(black_box(&log))));
    });
    group.finish();
}

fn bench_vram(c: &mut Criterion) {
    let data = synthetic_vram();
    let analyzer = VramAnalyzer::new(AnalysisConfig::default()).unwrap();

    let mut group = c.benchmark_group("vram");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("scan_ranges", |b| {
        b.iter(|| black_box(scan_ranges(black_box(&data))));
    });
    group.bench_function("analyze", |b| {
        b.iter(|| black_box(analyzer.analyze(black_box(&data))));
    });
    group.finish();
}

criterion_group!(benches, bench_summary, bench_vram);
criterion_main!(benches);
