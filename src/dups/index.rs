/// Seed indexing: group fixed-length line windows by content.
///
/// Every window of `min_lines` consecutive lines is hashed with FNV-1a as a
/// pre-filter, then hash buckets are partitioned by actual text comparison
/// so that two windows land in the same group iff their content is equal
/// under the active comparison mode. Groups with a single occurrence cannot
/// produce a duplicate and are dropped.
use std::collections::HashMap;

use crate::lines::{lines_equal, strip_indent};

use super::SourceFile;

/// A window location before extension: file index plus 0-based start line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Occurrence {
    pub file: usize,
    pub start: usize,
}

pub(crate) struct SeedIndex {
    /// Candidate seed groups, each holding 2+ occurrences of equal content.
    pub groups: Vec<Vec<Occurrence>>,
    /// Total number of windows indexed, for diagnostics.
    pub windows: usize,
}

/// Compute the FNV-1a hash of a window. A separator byte between lines
/// keeps shifted line boundaries from colliding.
fn hash_window(lines: &[String], ignore_indent: bool) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for line in lines {
        let text = if ignore_indent {
            strip_indent(line)
        } else {
            line.as_str()
        };
        for byte in text.as_bytes() {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(0x100000001b3);
        }
        hash ^= 0xff;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// Canonical string form of a window under the active comparison mode.
/// Used as the aggregation key for merged blocks, never stored in output.
pub(crate) fn window_key(lines: &[String], ignore_indent: bool) -> String {
    let mut key = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            key.push('\n');
        }
        key.push_str(if ignore_indent {
            strip_indent(line)
        } else {
            line
        });
    }
    key
}

pub(crate) fn build_index(
    files: &[SourceFile],
    min_lines: usize,
    ignore_indent: bool,
) -> SeedIndex {
    let mut buckets: HashMap<u64, Vec<Occurrence>> = HashMap::new();
    let mut windows = 0usize;
    for (file, f) in files.iter().enumerate() {
        if f.lines.len() < min_lines {
            continue;
        }
        for start in 0..=(f.lines.len() - min_lines) {
            let hash = hash_window(&f.lines[start..start + min_lines], ignore_indent);
            buckets.entry(hash).or_default().push(Occurrence { file, start });
            windows += 1;
        }
    }

    let mut groups: Vec<Vec<Occurrence>> = Vec::new();
    for (_, occs) in buckets {
        if occs.len() < 2 {
            continue;
        }
        for class in split_by_content(files, occs, min_lines, ignore_indent) {
            if class.len() >= 2 {
                groups.push(class);
            }
        }
    }

    // Stable processing order; output ordering never depends on it, but
    // deterministic iteration keeps debugging sane.
    groups.sort_by_key(|g| (g[0].file, g[0].start));
    SeedIndex { groups, windows }
}

/// Partition a hash bucket into true content-equality classes, guarding
/// against FNV collisions. Buckets are small, so a linear scan per
/// occurrence is fine.
fn split_by_content(
    files: &[SourceFile],
    occs: Vec<Occurrence>,
    min_lines: usize,
    ignore_indent: bool,
) -> Vec<Vec<Occurrence>> {
    let mut classes: Vec<Vec<Occurrence>> = Vec::new();
    'next: for occ in occs {
        for class in &mut classes {
            if windows_equal(files, class[0], occ, min_lines, ignore_indent) {
                class.push(occ);
                continue 'next;
            }
        }
        classes.push(vec![occ]);
    }
    classes
}

fn windows_equal(
    files: &[SourceFile],
    a: Occurrence,
    b: Occurrence,
    len: usize,
    ignore_indent: bool,
) -> bool {
    let wa = &files[a.file].lines[a.start..a.start + len];
    let wb = &files[b.file].lines[b.start..b.start + len];
    wa.iter()
        .zip(wb.iter())
        .all(|(x, y)| lines_equal(x, y, ignore_indent))
}
