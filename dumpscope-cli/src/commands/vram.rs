use std::{
    io::{self, Write},
    path::Path,
};

use anyhow::Context;
use dumpscope::vram::{AnalysisConfig, VramAnalyzer, VramReport};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_dump, parse_offset_arg},
    output::{print_output, short_size, Align, TabWriter},
};

/// Flags of the `vram` subcommand.
pub struct VramOptions<'a> {
    pub start: Option<&'a str>,
    pub len: Option<&'a str>,
    pub chunk_size: usize,
    pub page_size: usize,
    pub preview: usize,
    pub block_size: usize,
}

#[derive(Debug, Serialize)]
struct Window {
    start: usize,
    end: usize,
    dump_size: usize,
}

#[derive(Debug, Serialize)]
struct VramOutput {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    window: Option<Window>,
    config: AnalysisConfig,
    report: VramReport,
}

pub fn run(path: &Path, options: &VramOptions<'_>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let start = parse_offset_arg("--start", options.start)?;
    let len = parse_offset_arg("--len", options.len)?;

    let config = AnalysisConfig::default()
        .with_chunk_size(options.chunk_size)
        .with_page_size(options.page_size)
        .with_preview_limit(options.preview)
        .with_block_size(options.block_size);
    let analyzer = VramAnalyzer::new(config)?;

    let dump = load_dump(path)?;
    let data = dump.window(start, len).with_context(|| {
        format!(
            "window at {:#x} does not fit the {} byte dump",
            start.unwrap_or(0),
            dump.len()
        )
    })?;

    let window = (start.is_some() || len.is_some()).then(|| {
        let begin = start.unwrap_or(0);
        Window {
            start: begin,
            end: begin + data.len(),
            dump_size: dump.len(),
        }
    });

    let output = VramOutput {
        file: path.display().to_string(),
        window,
        config: *analyzer.config(),
        report: analyzer.analyze(data),
    };

    let mut written = Ok(());
    print_output(&output, opts, |out| {
        written = write_report(&mut io::stdout().lock(), out);
    })?;
    written?;
    Ok(())
}

/// Write the plain-text report.
fn write_report(w: &mut dyn Write, out: &VramOutput) -> io::Result<()> {
    let report = &out.report;
    let config = &out.config;

    if let Some(window) = &out.window {
        writeln!(
            w,
            "window: {:#06x} .. {:#06x} of {} bytes",
            window.start, window.end, window.dump_size
        )?;
    }
    writeln!(w, "size: {} bytes", report.size)?;
    if let Some(mismatch) = &report.length_mismatch {
        writeln!(w, "warning: {mismatch}")?;
    }
    if report.is_all_zero() {
        writeln!(w, "all zeros")?;
        return Ok(());
    }

    writeln!(
        w,
        "first non-zero ranges (up to {}):",
        config.preview_limit
    )?;
    for range in &report.ranges {
        writeln!(
            w,
            "  {:#06x} .. {:#06x} ({} bytes)",
            range.start,
            range.end,
            range.len()
        )?;
    }

    writeln!(
        w,
        "bucketed {} pages with data:",
        short_size(config.page_size)
    )?;
    for (page, chunks) in report.pages.iter() {
        writeln!(
            w,
            "  page {page:#04x}: {chunks} non-zero {} chunks",
            short_size(config.chunk_size)
        )?;
    }

    let content = &report.content;
    writeln!(
        w,
        "content: {} non-zero bytes ({:.2}%), {} unique values",
        content.non_zero_bytes,
        content.usage_percent(report.size),
        content.unique_values
    )?;

    if !content.samples.is_empty() {
        writeln!(w, "first non-zero bytes:")?;
        let mut tw =
            TabWriter::new(vec![("Offset", Align::Left), ("Value", Align::Right)]).indent("  ");
        for sample in &content.samples {
            tw.row(vec![
                format!("{:#06x}", sample.offset),
                format!("{:#04x}", sample.value),
            ]);
        }
        w.write_all(tw.render().as_bytes())?;
    }

    if !report.distribution.is_empty() {
        writeln!(
            w,
            "distribution by {} blocks (word addresses):",
            short_size(config.block_size)
        )?;
        for block in &report.distribution {
            writeln!(w, "  {}: {} bytes", block.label(), block.non_zero_bytes)?;
        }
    }

    Ok(())
}
