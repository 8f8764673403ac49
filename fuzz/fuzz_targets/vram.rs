#![no_main]

use libfuzzer_sys::fuzz_target;
use dumpscope::vram::{AnalysisConfig, VramAnalyzer};

fuzz_target!(|data: &[u8]| {
    // Small sizes so short inputs still span several chunks and pages.
    let config = AnalysisConfig::default()
        .with_chunk_size(4)
        .with_page_size(16)
        .with_block_size(32);
    if let Ok(analyzer) = VramAnalyzer::new(config) {
        let _ = analyzer.analyze(data);
    }
});
