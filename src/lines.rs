use std::fs;
use std::io;
use std::path::Path;

/// Read a file into normalized lines: content is split on `\n`, a single
/// trailing `\r` is dropped from each line (CRLF normalization), and a UTF-8
/// BOM is stripped if present at the very start. Indentation and casing are
/// preserved verbatim.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    Ok(content.lines().map(str::to_owned).collect())
}

/// Strip leading spaces and tabs from a line.
pub fn strip_indent(line: &str) -> &str {
    line.trim_start_matches([' ', '\t'])
}

/// Line equality under the active comparison mode. With `ignore_indent`,
/// leading whitespace is excluded from the comparison; stored content is
/// never rewritten.
pub fn lines_equal(a: &str, b: &str, ignore_indent: bool) -> bool {
    if ignore_indent {
        strip_indent(a) == strip_indent(b)
    } else {
        a == b
    }
}
