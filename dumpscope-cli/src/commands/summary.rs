use std::path::Path;

use anyhow::Context;
use dumpscope::{file::read_log, summary};

/// Extract every terminated register summary from `path` as pretty-printed JSON.
///
/// The output is always JSON; it goes to `output` when given, stdout otherwise. Nothing is
/// written unless the whole log was read and serialized.
pub fn run(path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let text =
        read_log(path).with_context(|| format!("failed to read log: {}", path.display()))?;
    let records = summary::extract(&text);
    let json = summary::to_json(&records)?;

    match output {
        Some(out) => {
            std::fs::write(out, format!("{json}\n"))
                .with_context(|| format!("failed to write output: {}", out.display()))?;
            log::info!("wrote {} record(s) to {}", records.len(), out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
noise
━━━━ REGISTER SUMMARY @ Frame 3 ━━━━
  A: 1
━━━━━━━━━━━━━━━━
";

    #[test]
    fn writes_json_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("emu.log");
        let out = dir.path().join("records.json");
        std::fs::write(&log, LOG).unwrap();

        run(&log, Some(&out)).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.ends_with("]\n"));
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value[0]["A"], "1");
        assert_eq!(value[0]["frame"], 3);
    }

    #[test]
    fn missing_log_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("records.json");

        let err = run(&dir.path().join("absent.log"), Some(&out)).unwrap_err();
        assert!(err.to_string().contains("absent.log"));
        assert!(!out.exists());
    }
}
