//! Brute-force maximal exact match enumeration.
//!
//! Every (query offset, reference offset) pair is considered as a match start.
//! A pair is seeded only when the match cannot be extended one symbol to the
//! left; from there the match is extended to the right until a mismatch or the
//! end of either sequence. Every run of at least `min_length` symbols is
//! reported, including runs nested inside or overlapping other runs.

use std::time::Instant;

use tracing::debug;

use crate::core::sequence::Sequence;
use crate::core::types::{Match, MatchSet, MinLength};

/// Find all maximal exact matches of length at least `min_length` between
/// `query` and `reference`.
///
/// Matches are returned in loop order (query offset outer, reference offset
/// inner). An empty query or reference yields an empty set.
#[must_use]
pub fn find_mems(reference: &Sequence, query: &Sequence, min_length: MinLength) -> MatchSet {
    let started = Instant::now();
    let s = reference.as_bytes();
    let q = query.as_bytes();
    let min_length = min_length.get();

    let mut mems = MatchSet::default();

    for i in 0..q.len() {
        for j in 0..s.len() {
            if !is_left_maximal(s, q, i, j) {
                continue;
            }

            let k = extend_right(s, q, i, j);
            if k >= min_length {
                mems.push(Match::new(k, i, j));
            }
        }
    }

    debug!(
        query_len = q.len(),
        reference_len = s.len(),
        matches = mems.len(),
        elapsed = ?started.elapsed(),
        "Enumerated MEMs"
    );

    mems
}

/// A start pair is eligible when it touches either sequence's left edge or
/// the preceding symbols differ.
#[inline]
fn is_left_maximal(s: &[u8], q: &[u8], i: usize, j: usize) -> bool {
    i == 0 || j == 0 || q[i - 1] != s[j - 1]
}

/// Length of the exact run starting at `q[i]` / `s[j]`
#[inline]
fn extend_right(s: &[u8], q: &[u8], i: usize, j: usize) -> usize {
    let mut k = 0;
    while j + k < s.len() && i + k < q.len() && s[j + k] == q[i + k] {
        k += 1;
    }
    k
}

/// Check that `m` is an exact, maximal match of `query` against `reference`.
///
/// Used to sanity-check externally produced triples: the window must be in
/// bounds and identical, and the run must not extend in either direction.
#[must_use]
pub fn is_maximal_match(reference: &Sequence, query: &Sequence, m: &Match) -> bool {
    let s = reference.as_bytes();
    let q = query.as_bytes();
    let (k, i, j) = (m.length, m.query_offset, m.reference_offset);

    let query_in_bounds = i.checked_add(k).is_some_and(|end| end <= q.len());
    let reference_in_bounds = j.checked_add(k).is_some_and(|end| end <= s.len());
    let in_bounds = query_in_bounds && reference_in_bounds;
    if !in_bounds || q[i..i + k] != s[j..j + k] {
        return false;
    }

    let right_maximal = i + k == q.len() || j + k == s.len() || q[i + k] != s[j + k];
    is_left_maximal(s, q, i, j) && right_maximal
}
