use std::path::Path;

use anyhow::Context;
use dumpscope::{file::Dump, utils::parse_offset};

/// Load a VRAM snapshot.
pub fn load_dump(path: &Path) -> anyhow::Result<Dump> {
    Dump::from_file(path).with_context(|| format!("failed to load dump: {}", path.display()))
}

/// Parse an optional offset argument, naming the flag on failure.
pub fn parse_offset_arg(flag: &str, value: Option<&str>) -> anyhow::Result<Option<usize>> {
    value
        .map(|text| {
            parse_offset(text).with_context(|| format!("invalid value for {flag}: {text}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_accept_hex_and_decimal() {
        assert_eq!(parse_offset_arg("--start", Some("0x800")).unwrap(), Some(0x800));
        assert_eq!(parse_offset_arg("--start", Some("2048")).unwrap(), Some(2048));
        assert_eq!(parse_offset_arg("--start", None).unwrap(), None);
    }

    #[test]
    fn bad_offset_names_the_flag() {
        let err = parse_offset_arg("--len", Some("0xZZ")).unwrap_err();
        assert!(err.to_string().contains("--len"));
    }

    #[test]
    fn missing_dump_reports_path() {
        let err = load_dump(Path::new("/nonexistent/snapshot.vram")).unwrap_err();
        assert!(err.to_string().contains("snapshot.vram"));
    }
}
