use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Byte count in the short form used by report headings: `512B`, `2KB`.
pub fn short_size(bytes: usize) -> String {
    if bytes >= 1024 && bytes % 1024 == 0 {
        format!("{}KB", bytes / 1024)
    } else {
        format!("{bytes}B")
    }
}

/// Column alignment for tabular output.
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

/// Tabular writer backed by `comfy-table` for dynamically aligned CLI output.
///
/// Columns are sized to the widest entry, separated by whitespace only.
pub struct TabWriter {
    table: Table,
    indent: String,
}

impl TabWriter {
    /// Create a new `TabWriter` with the given `(header, alignment)` columns.
    pub fn new(columns: Vec<(&str, Align)>) -> Self {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let headers: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
        table.set_header(headers);

        // First column: no left padding. Last column: no right padding.
        let last = columns.len().saturating_sub(1);
        for (i, (_, align)) in columns.iter().enumerate() {
            let cell_align = match align {
                Align::Left => CellAlignment::Left,
                Align::Right => CellAlignment::Right,
            };
            if let Some(col) = table.column_mut(i) {
                col.set_cell_alignment(cell_align);
                let pad_left = if i == 0 { 0 } else { 1 };
                let pad_right = if i == last { 0 } else { 1 };
                col.set_padding((pad_left, pad_right));
            }
        }

        Self {
            table,
            indent: String::new(),
        }
    }

    /// Set the indent prefix for every line (e.g. `"  "` for 2-space indent).
    pub fn indent(mut self, prefix: &str) -> Self {
        self.indent = prefix.to_string();
        self
    }

    /// Add a row. Values are given in column order.
    pub fn row(&mut self, values: Vec<String>) {
        self.table.add_row(values);
    }

    /// Render the table, one newline-terminated line per row.
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for line in self.table.to_string().lines() {
            rendered.push_str(&self.indent);
            rendered.push_str(line.trim_end());
            rendered.push('\n');
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_size_prefers_kilobytes() {
        assert_eq!(short_size(0x800), "2KB");
        assert_eq!(short_size(0x1000), "4KB");
        assert_eq!(short_size(0x200), "512B");
        assert_eq!(short_size(1536), "1536B");
    }

    #[test]
    fn tab_writer_indents_and_aligns() {
        let mut tw = TabWriter::new(vec![("Block", Align::Left), ("Bytes", Align::Right)])
            .indent("  ");
        tw.row(vec!["0x0000".to_string(), "12".to_string()]);
        tw.row(vec!["0x0800".to_string(), "4096".to_string()]);

        let rendered = tw.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines.iter().all(|line| line.starts_with("  ")));
        assert!(lines.iter().any(|line| line.contains("0x0800") && line.ends_with("4096")));
        assert!(lines.iter().any(|line| line.contains("0x0000") && line.ends_with("12")));
    }
}
