/// Report rendering for detected duplicate blocks.
///
/// YAML is the default output; `--json` selects the serde path. Both carry
/// the same fields per block: line count, byte count, occurrence count, the
/// sorted hit list, and the block content.
use serde::Serialize;

use crate::dups::{DuplicateBlock, Hit};

/// Escape a string as a YAML double-quoted scalar. Control characters
/// become `\xHH`.
fn yaml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    out.push('"');
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\x{:02X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Byte length of the block content including one newline per line.
fn bytes_of_lines(lines: &[String]) -> usize {
    lines.iter().map(|l| l.len() + 1).sum()
}

pub fn render_yaml(blocks: &[DuplicateBlock]) -> String {
    let mut out = String::from("blocks:\n");
    for block in blocks {
        out.push_str(&format!("  - lines: {}\n", block.lines.len()));
        out.push_str(&format!("    bytes: {}\n", bytes_of_lines(&block.lines)));
        out.push_str(&format!("    occurrences: {}\n", block.hits.len()));
        out.push_str("    hits:\n");
        for hit in &block.hits {
            out.push_str(&format!("      - file: {}\n", yaml_escape(&hit.path)));
            out.push_str(&format!("        start_line: {}\n", hit.start_line));
            out.push_str(&format!("        end_line: {}\n", hit.end_line));
        }
        out.push_str("    content: |\n");
        for line in &block.lines {
            out.push_str("      ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

#[derive(Serialize)]
struct JsonBlock<'a> {
    lines: usize,
    bytes: usize,
    occurrences: usize,
    hits: &'a [Hit],
    content: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    blocks: Vec<JsonBlock<'a>>,
}

pub fn render_json(blocks: &[DuplicateBlock]) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        blocks: blocks
            .iter()
            .map(|block| JsonBlock {
                lines: block.lines.len(),
                bytes: bytes_of_lines(&block.lines),
                occurrences: block.hits.len(),
                hits: &block.hits,
                content: block.lines.join("\n"),
            })
            .collect(),
    };
    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
