/// Glob pattern compilation.
///
/// A pattern splits into a base directory (the literal path prefix up to,
/// but excluding, the segment containing the first wildcard) and a suffix
/// that is translated into an anchored regex matched against paths relative
/// to the base. Supported syntax: `*` (any run of characters except `/`),
/// `?` (exactly one such character), `**` (two or more stars: any run of
/// characters including `/`). Bracket classes are not glob syntax here and
/// match literally.
use std::path::PathBuf;

use regex::Regex;

pub struct CompiledPattern {
    pub base: PathBuf,
    suffix: Regex,
}

impl CompiledPattern {
    /// Test a path relative to the base, in `/`-separated form.
    /// Anchoring is full-string, not substring.
    pub fn matches(&self, relative: &str) -> bool {
        self.suffix.is_match(relative)
    }
}

pub fn compile(pattern: &str) -> CompiledPattern {
    let normalized = normalize(pattern);
    let (base, suffix) = split_base(normalized);
    let regex = Regex::new(&glob_to_regex(&suffix))
        .expect("escaped glob suffix is always a valid regex");
    CompiledPattern {
        base,
        suffix: regex,
    }
}

/// Drop leading `./` segments so `./src/*.rs` and `src/*.rs` resolve alike.
fn normalize(pattern: &str) -> &str {
    let mut p = pattern;
    while let Some(rest) = p.strip_prefix("./") {
        p = rest;
    }
    p
}

/// Split a pattern into its wildcard-free base directory and the glob
/// suffix to match below it. A pattern without wildcards is its own base
/// and matches everything beneath it (or itself, if it names a file).
fn split_base(pattern: &str) -> (PathBuf, String) {
    let Some(first) = pattern.find(['*', '?']) else {
        let base = if pattern.is_empty() { "." } else { pattern };
        return (PathBuf::from(base), String::from("**"));
    };
    match pattern[..first].rfind('/') {
        Some(slash) => {
            let base = &pattern[..slash];
            let base = if base.is_empty() { "/" } else { base };
            (PathBuf::from(base), pattern[slash + 1..].to_string())
        }
        None => (PathBuf::from("."), pattern.to_string()),
    }
}

/// Translate a glob suffix into an anchored regex string.
fn glob_to_regex(suffix: &str) -> String {
    let mut out = String::with_capacity(suffix.len() * 2 + 4);
    out.push('^');
    let chars: Vec<char> = suffix.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                let mut j = i;
                while j < chars.len() && chars[j] == '*' {
                    j += 1;
                }
                if j - i >= 2 {
                    out.push_str(".*");
                } else {
                    out.push_str("[^/]*");
                }
                i = j;
            }
            '?' => {
                out.push_str("[^/]");
                i += 1;
            }
            c => {
                if matches!(
                    c,
                    '.' | '+' | '(' | ')' | '^' | '$' | '|' | '{' | '}' | '[' | ']' | '\\'
                ) {
                    out.push('\\');
                }
                out.push(c);
                i += 1;
            }
        }
    }
    out.push('$');
    out
}
