#![no_main]

use libfuzzer_sys::fuzz_target;
use dumpscope::summary;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let records = summary::extract(&text);
    let _ = summary::to_json(&records);
});
