/// Duplicate block detection across files.
///
/// ## Pipeline
///
/// **Seeding:** slide a window of `min_lines` over every file and group
/// windows by content ([`index`]).
///
/// **Extension:** grow each group of 2+ occurrences backward and forward
/// into the maximal block they all share ([`extend`]).
///
/// **Aggregation:** collapse blocks reached from overlapping seeds,
/// deduplicate hits, drop singletons, and order the result ([`merge`]).
mod extend;
mod index;
mod merge;

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::diag::{DiagEvent, DiagSink};
use crate::glob;
use crate::lines;
use crate::report;

/// A loaded file: identifier plus normalized lines, immutable after loading.
pub struct SourceFile {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

/// One location of a duplicate block. Line numbers are 1-based inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    #[serde(rename = "file")]
    pub path: String,
    pub start_line: usize,
    pub end_line: usize,
}

/// A maximal repeated region: the block's lines (verbatim, from the
/// canonical occurrence) and every location it appears, 2+ of them.
#[derive(Debug, Clone)]
pub struct DuplicateBlock {
    pub lines: Vec<String>,
    pub hits: Vec<Hit>,
}

/// Configuration surface consumed by the pipeline.
pub struct Options {
    pub min_lines: usize,
    pub ignore_indentation: bool,
    pub json: bool,
}

/// Configuration errors, raised before any file I/O. Resolution problems
/// (missing bases, unreadable files) are diagnostics, never errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min-lines must be at least 1 (got {0})")]
    MinLines(usize),
    #[error("no file patterns given")]
    NoPatterns,
}

/// Resolve patterns, load files, detect duplicates, and print the report.
pub fn run(
    patterns: &[String],
    opts: &Options,
    sink: &mut dyn DiagSink,
) -> Result<(), Box<dyn std::error::Error>> {
    if opts.min_lines < 1 {
        return Err(ConfigError::MinLines(opts.min_lines).into());
    }
    if patterns.is_empty() {
        return Err(ConfigError::NoPatterns.into());
    }

    let paths = glob::resolve(patterns, sink);

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let lines = match lines::read_lines(&path) {
            Ok(lines) => {
                sink.emit(DiagEvent::FileLoaded {
                    path: path.clone(),
                    lines: lines.len(),
                });
                lines
            }
            Err(err) => {
                // contributes no candidate duplicates, not a fatal error
                sink.emit(DiagEvent::FileUnreadable {
                    path: path.clone(),
                    message: err.to_string(),
                });
                Vec::new()
            }
        };
        files.push(SourceFile { path, lines });
    }

    let blocks = detect_duplicates(&files, opts.min_lines, opts.ignore_indentation, sink)?;

    if opts.json {
        print!("{}", report::render_json(&blocks)?);
    } else {
        print!("{}", report::render_yaml(&blocks));
    }
    Ok(())
}

/// Detect every maximal repeated block of `min_lines`+ consecutive lines
/// occurring at 2+ distinct locations across `files`. See module-level
/// documentation for the pipeline phases.
pub fn detect_duplicates(
    files: &[SourceFile],
    min_lines: usize,
    ignore_indentation: bool,
    sink: &mut dyn DiagSink,
) -> Result<Vec<DuplicateBlock>, ConfigError> {
    if min_lines < 1 {
        return Err(ConfigError::MinLines(min_lines));
    }

    let seeds = index::build_index(files, min_lines, ignore_indentation);
    sink.emit(DiagEvent::IndexBuilt {
        windows: seeds.windows,
        candidates: seeds.groups.len(),
    });

    let candidates: Vec<_> = seeds
        .groups
        .iter()
        .map(|group| extend::extend(files, group, min_lines, ignore_indentation))
        .collect();

    let blocks = merge::aggregate(files, candidates, ignore_indentation);
    sink.emit(DiagEvent::BlocksFound {
        blocks: blocks.len(),
    });
    Ok(blocks)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
