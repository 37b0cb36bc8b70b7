/// Pattern resolution: turn glob patterns into a concrete, deterministic
/// file set.
///
/// Each pattern compiles into a base directory and a match predicate. A base
/// that names a regular file is tested by file name alone; a directory base
/// is walked recursively (following symlinks to directories) and every
/// regular file is tested by its path relative to the base. Missing bases
/// are skipped with a diagnostic. The combined result is deduplicated by
/// canonical path and sorted lexicographically.
mod pattern;

pub use pattern::{CompiledPattern, compile};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::diag::{DiagEvent, DiagSink};

pub fn resolve(patterns: &[String], sink: &mut dyn DiagSink) -> Vec<PathBuf> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut results: Vec<PathBuf> = Vec::new();

    for pat in patterns {
        let compiled = compile(pat);
        sink.emit(DiagEvent::PatternCompiled {
            pattern: pat.clone(),
            base: compiled.base.clone(),
        });
        if !compiled.base.exists() {
            sink.emit(DiagEvent::BaseMissing {
                base: compiled.base.clone(),
            });
            continue;
        }

        let mut matched = 0usize;
        if compiled.base.is_file() {
            let name = compiled
                .base
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if compiled.matches(&name) && insert_unique(&mut seen, &mut results, &compiled.base) {
                matched += 1;
            }
        } else {
            let walker = WalkBuilder::new(&compiled.base)
                .standard_filters(false)
                .follow_links(true)
                .build();
            for entry in walker {
                let entry = match entry {
                    Ok(e) => e,
                    Err(err) => {
                        sink.emit(DiagEvent::WalkError {
                            message: err.to_string(),
                        });
                        continue;
                    }
                };
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let Ok(rel) = entry.path().strip_prefix(&compiled.base) else {
                    continue;
                };
                if compiled.matches(&to_slash(rel))
                    && insert_unique(&mut seen, &mut results, entry.path())
                {
                    matched += 1;
                }
            }
        }
        sink.emit(DiagEvent::PatternMatched {
            pattern: pat.clone(),
            files: matched,
        });
    }

    results.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    results
}

/// Record a match, deduplicating by canonical path so the same file reached
/// through different patterns (or spellings) is reported once.
fn insert_unique(seen: &mut HashSet<PathBuf>, results: &mut Vec<PathBuf>, path: &Path) -> bool {
    let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if seen.insert(key) {
        results.push(path.to_path_buf());
        true
    } else {
        false
    }
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
