//! Exact occurrences of a whole pattern in the reference.

use crate::core::sequence::Sequence;

/// Reference offsets where `pattern` occurs exactly, leftmost first.
///
/// Without `overlapping`, scanning resumes after the end of each hit, so
/// `AA` occurs in `AAAA` at `[0, 2]`; with it, scanning resumes one symbol
/// later and the result is `[0, 1, 2]`. An empty pattern has no occurrences.
#[must_use]
pub fn find_occurrences(reference: &Sequence, pattern: &Sequence, overlapping: bool) -> Vec<usize> {
    let s = reference.as_bytes();
    let p = pattern.as_bytes();

    if p.is_empty() || p.len() > s.len() {
        return Vec::new();
    }

    let step = if overlapping { 1 } else { p.len() };
    let mut hits = Vec::new();
    let mut start = 0;

    while start + p.len() <= s.len() {
        match s[start..].windows(p.len()).position(|w| w == p) {
            Some(offset) => {
                let hit = start + offset;
                hits.push(hit);
                start = hit + step;
            }
            None => break,
        }
    }

    hits
}
