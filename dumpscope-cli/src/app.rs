use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dumpscope::vram::{
    DEFAULT_BLOCK_SIZE, DEFAULT_CHUNK_SIZE, DEFAULT_PAGE_SIZE, DEFAULT_PREVIEW_LIMIT,
};

/// dumpscope - register-summary extraction and VRAM snapshot analysis for emulator debugging
#[derive(Debug, Parser)]
#[command(name = "dumpscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract register summaries from an emulator log as a JSON array (one object per frame).
    Summary {
        /// Path to the emulator log.
        #[arg(value_name = "LOG")]
        path: PathBuf,

        /// Write the JSON to this file instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Report where non-zero data lives in a raw VRAM snapshot.
    Vram {
        /// Path to the VRAM dump.
        #[arg(value_name = "DUMP")]
        path: PathBuf,

        /// Analyze from this offset (hex like 0x8000 or decimal).
        #[arg(long, value_name = "OFFSET")]
        start: Option<String>,

        /// Analyze this many bytes (hex like 0x800 or decimal).
        #[arg(long, value_name = "LEN")]
        len: Option<String>,

        /// Sampling chunk size in bytes.
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Page group size in bytes.
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Number of non-zero ranges to list.
        #[arg(long, default_value_t = DEFAULT_PREVIEW_LIMIT)]
        preview: usize,

        /// Block size for the word-addressed distribution.
        #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
        block_size: usize,
    },
}
