mod app;
mod commands;
mod output;

use anyhow::Context;
use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })
    .context("failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    // Show dumpscope info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("dumpscope", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Summary { path, output } => commands::summary::run(path, output.as_deref()),
        Command::Vram {
            path,
            start,
            len,
            chunk_size,
            page_size,
            preview,
            block_size,
        } => commands::vram::run(
            path,
            &commands::vram::VramOptions {
                start: start.as_deref(),
                len: len.as_deref(),
                chunk_size: *chunk_size,
                page_size: *page_size,
                preview: *preview,
                block_size: *block_size,
            },
            &cli.global,
        ),
    }
}
