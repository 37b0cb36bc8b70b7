/// Block extension: grow a seed group into the maximal shared block.
///
/// A seed window is the *minimum* duplicate; the real repeated region may be
/// larger. Extension shifts every occurrence backward one line at a time
/// while all preceding lines agree, then grows the length forward while all
/// following lines agree. It stops at the first line that breaks equality
/// for any occurrence, or at any file boundary, so the result is maximal in
/// both directions for this fixed set of occurrences.
use crate::lines::lines_equal;

use super::SourceFile;
use super::index::Occurrence;

pub(crate) fn extend(
    files: &[SourceFile],
    seed: &[Occurrence],
    seed_len: usize,
    ignore_indent: bool,
) -> (Vec<Occurrence>, usize) {
    let mut occs = seed.to_vec();

    // backward
    loop {
        if occs.iter().any(|o| o.start == 0) {
            break;
        }
        let first = &files[occs[0].file].lines[occs[0].start - 1];
        let all_match = occs[1..]
            .iter()
            .all(|o| lines_equal(&files[o.file].lines[o.start - 1], first, ignore_indent));
        if !all_match {
            break;
        }
        for o in &mut occs {
            o.start -= 1;
        }
    }

    // forward
    let mut length = seed_len;
    loop {
        let Some(first) = files[occs[0].file].lines.get(occs[0].start + length) else {
            break;
        };
        let all_match = occs[1..].iter().all(|o| {
            files[o.file]
                .lines
                .get(o.start + length)
                .is_some_and(|line| lines_equal(line, first, ignore_indent))
        });
        if !all_match {
            break;
        }
        length += 1;
    }

    (occs, length)
}
