use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::*;
use crate::diag::{DiagEvent, RecordingSink};

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"x\n").unwrap();
}

fn resolve_in(dir: &Path, patterns: &[&str]) -> Vec<String> {
    let patterns: Vec<String> = patterns
        .iter()
        .map(|p| dir.join(p).to_string_lossy().into_owned())
        .collect();
    let mut sink = RecordingSink::default();
    resolve(&patterns, &mut sink)
        .into_iter()
        .map(|p| {
            p.strip_prefix(dir)
                .map(|r| r.to_string_lossy().into_owned())
                .unwrap_or_else(|_| p.to_string_lossy().into_owned())
        })
        .collect()
}

#[test]
fn star_matches_only_base_level() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.rs"));
    touch(&dir.path().join("b.rs"));
    touch(&dir.path().join("c.txt"));
    touch(&dir.path().join("sub/d.rs"));

    let found = resolve_in(dir.path(), &["*.rs"]);
    assert_eq!(found, vec!["a.rs", "b.rs"]);
}

#[test]
fn double_star_descends_recursively() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("top.rs"));
    touch(&dir.path().join("a/one.rs"));
    touch(&dir.path().join("a/b/two.rs"));
    touch(&dir.path().join("a/b/skip.txt"));

    let found = resolve_in(dir.path(), &["**/*.rs"]);
    // the slash after ** is literal, so top-level files need their own pattern
    assert_eq!(found, vec!["a/b/two.rs", "a/one.rs"]);

    let found = resolve_in(dir.path(), &["**/*.rs", "*.rs"]);
    assert_eq!(found, vec!["a/b/two.rs", "a/one.rs", "top.rs"]);
}

#[test]
fn wildcard_free_directory_takes_every_file() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("data/a.txt"));
    touch(&dir.path().join("data/sub/b.txt"));

    let found = resolve_in(dir.path(), &["data"]);
    assert_eq!(found, vec!["data/a.txt", "data/sub/b.txt"]);
}

#[test]
fn file_base_is_matched_by_name() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("single.rs"));

    let found = resolve_in(dir.path(), &["single.rs"]);
    assert_eq!(found, vec!["single.rs"]);
}

#[test]
fn missing_base_is_skipped_with_diagnostic() {
    let dir = tempdir().unwrap();
    let pattern = dir
        .path()
        .join("nope/*.rs")
        .to_string_lossy()
        .into_owned();
    let mut sink = RecordingSink::default();
    let found = resolve(&[pattern], &mut sink);
    assert!(found.is_empty());
    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, DiagEvent::BaseMissing { .. }))
    );
}

#[test]
fn duplicate_matches_are_reported_once() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.rs"));

    let found = resolve_in(dir.path(), &["*.rs", "a.rs", "a?rs"]);
    assert_eq!(found, vec!["a.rs"]);
}

#[test]
fn results_are_sorted_lexicographically() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("z.rs"));
    touch(&dir.path().join("a.rs"));
    touch(&dir.path().join("m/q.rs"));

    let found = resolve_in(dir.path(), &["**/*.rs", "*.rs"]);
    assert_eq!(found, vec!["a.rs", "m/q.rs", "z.rs"]);
}

#[test]
fn directories_are_never_matched() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("name.rs")).unwrap();
    touch(&dir.path().join("name.rs/inner.txt"));

    let found = resolve_in(dir.path(), &["*.rs"]);
    assert!(found.is_empty());
}

#[test]
fn hidden_files_are_included() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join(".hidden.rs"));

    let found = resolve_in(dir.path(), &["*.rs"]);
    assert_eq!(found, vec![".hidden.rs"]);
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_followed() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("real/a.rs"));
    std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

    let found = resolve_in(dir.path(), &["link/*.rs"]);
    assert_eq!(found, vec!["link/a.rs"]);
}

#[test]
fn pattern_diagnostics_are_emitted() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.rs"));
    let pattern = dir.path().join("*.rs").to_string_lossy().into_owned();
    let mut sink = RecordingSink::default();
    resolve(std::slice::from_ref(&pattern), &mut sink);
    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, DiagEvent::PatternCompiled { .. }))
    );
    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, DiagEvent::PatternMatched { files: 1, .. }))
    );
}
