/// Aggregation and ordering of extended blocks.
///
/// Overlapping seeds inside one repeated region all extend to the same
/// maximal block; they collapse here under a canonical content key. Hit
/// identity is `(path, start_line, end_line)`, so re-discovered locations
/// deduplicate while distinct ones survive. The representative `lines` of a
/// merged block come from the contributing occurrence with the smallest
/// `(path, start_line)`, never from map iteration order.
use std::collections::{BTreeSet, HashMap};

use super::index::{Occurrence, window_key};
use super::{DuplicateBlock, Hit, SourceFile};

pub(crate) fn aggregate(
    files: &[SourceFile],
    candidates: Vec<(Vec<Occurrence>, usize)>,
    ignore_indent: bool,
) -> Vec<DuplicateBlock> {
    struct Agg {
        rep: Occurrence,
        len: usize,
        hits: BTreeSet<(String, usize, usize)>,
    }

    let mut by_content: HashMap<String, Agg> = HashMap::new();
    for (occs, len) in candidates {
        let first = occs[0];
        let key = window_key(
            &files[first.file].lines[first.start..first.start + len],
            ignore_indent,
        );
        let agg = by_content.entry(key).or_insert_with(|| Agg {
            rep: first,
            len,
            hits: BTreeSet::new(),
        });
        for occ in occs {
            let path = files[occ.file].path.display().to_string();
            let rep_path = files[agg.rep.file].path.display().to_string();
            if (path.as_str(), occ.start) < (rep_path.as_str(), agg.rep.start) {
                agg.rep = occ;
            }
            agg.hits.insert((path, occ.start + 1, occ.start + len));
        }
    }

    let mut blocks: Vec<DuplicateBlock> = by_content
        .into_values()
        .filter(|agg| agg.hits.len() >= 2)
        .map(|agg| {
            let file = &files[agg.rep.file];
            DuplicateBlock {
                lines: file.lines[agg.rep.start..agg.rep.start + agg.len].to_vec(),
                hits: agg
                    .hits
                    .into_iter()
                    .map(|(path, start_line, end_line)| Hit {
                        path,
                        start_line,
                        end_line,
                    })
                    .collect(),
            }
        })
        .collect();

    sort_blocks(&mut blocks);
    blocks
}

/// Final ordering: line count descending, then occurrence count descending,
/// then first line, then full content. Hits within a block are already
/// sorted by `(path, start_line, end_line)` via the BTreeSet above.
fn sort_blocks(blocks: &mut [DuplicateBlock]) {
    blocks.sort_by(|a, b| {
        b.lines
            .len()
            .cmp(&a.lines.len())
            .then_with(|| b.hits.len().cmp(&a.hits.len()))
            .then_with(|| a.lines.first().cmp(&b.lines.first()))
            .then_with(|| a.lines.cmp(&b.lines))
    });
}
