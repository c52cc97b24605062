//! Property tests for brute-force MEM enumeration and validation.

use std::io::Cursor;

use mem_oracle::matching::bruteforce::is_maximal_match;
use mem_oracle::matching::validator::validate;
use mem_oracle::parsing::mems::write_mem_record;
use mem_oracle::{find_mems, Match, MatchSet, MinLength, Sequence, Verdict};
use proptest::prelude::*;

/// Short sequences over a small alphabet so that repeats are common
fn dna(max_len: usize) -> impl Strategy<Value = Sequence> {
    let base = prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')];
    proptest::collection::vec(base, 0..max_len).prop_map(Sequence::new)
}

fn min_length() -> impl Strategy<Value = MinLength> {
    (1i64..6).prop_map(|l| MinLength::new(l).unwrap())
}

proptest! {
    #[test]
    fn every_match_is_exact(s in dna(40), q in dna(20), l in min_length()) {
        for m in &find_mems(&s, &q, l) {
            prop_assert_eq!(
                s.window(m.reference_offset, m.length),
                q.window(m.query_offset, m.length)
            );
            prop_assert!(m.reference_offset + m.length <= s.len());
            prop_assert!(m.query_offset + m.length <= q.len());
        }
    }

    #[test]
    fn every_match_is_maximal(s in dna(40), q in dna(20), l in min_length()) {
        for m in &find_mems(&s, &q, l) {
            prop_assert!(is_maximal_match(&s, &q, m), "{} is not maximal", m);
        }
    }

    #[test]
    fn threshold_is_enforced(s in dna(40), q in dna(20), l in min_length()) {
        for m in &find_mems(&s, &q, l) {
            prop_assert!(m.length >= l.get());
        }
    }

    #[test]
    fn lowering_threshold_only_adds(s in dna(40), q in dna(20), l in 2i64..6) {
        let strict = find_mems(&s, &q, MinLength::new(l).unwrap());
        let relaxed = find_mems(&s, &q, MinLength::new(l - 1).unwrap());
        prop_assert!(relaxed.len() >= strict.len());
        for m in &strict {
            prop_assert!(relaxed.contains(m));
        }
    }

    #[test]
    fn enumeration_is_idempotent(s in dna(40), q in dna(20), l in min_length()) {
        prop_assert_eq!(find_mems(&s, &q, l), find_mems(&s, &q, l));
    }

    #[test]
    fn every_maximal_run_is_found(s in dna(30), q in dna(15)) {
        // Exhaustively check every window pair against the maximality predicate
        let mems = find_mems(&s, &q, MinLength::default());
        for i in 0..q.len() {
            for j in 0..s.len() {
                for k in 1..=q.len().min(s.len()) {
                    let m = Match::new(k, i, j);
                    if is_maximal_match(&s, &q, &m) {
                        prop_assert!(mems.contains(&m), "missing {}", m);
                    }
                }
            }
        }
    }

    #[test]
    fn validator_accepts_own_output_in_any_order(
        s in dna(40),
        q in dna(20),
        l in min_length(),
        seed in any::<u64>(),
    ) {
        let mut reported: Vec<Match> = find_mems(&s, &q, l).into_iter().collect();
        if !reported.is_empty() {
            let n = reported.len();
            reported.rotate_left((seed as usize) % n);
        }

        let mut stream = Vec::new();
        write_mem_record(&mut stream, &q, &MatchSet::new(reported)).unwrap();

        let reports: Vec<_> = validate(Cursor::new(stream), &s, l).collect();
        // An empty query writes a blank query line, which is skipped
        if q.is_empty() {
            prop_assert!(reports.is_empty());
        } else {
            prop_assert_eq!(reports.len(), 1);
            let report = reports.into_iter().next().unwrap().unwrap();
            prop_assert_eq!(report.verdict, Verdict::AllOk);
        }
    }

    #[test]
    fn validator_rejects_dropped_or_duplicated_match(
        s in dna(40),
        q in dna(20).prop_filter("non-empty query", |q| !q.is_empty()),
        l in (1i64..4).prop_map(|l| MinLength::new(l).unwrap()),
        duplicate in any::<bool>(),
    ) {
        let mut reported: Vec<Match> = find_mems(&s, &q, l).into_iter().collect();
        prop_assume!(!reported.is_empty());
        if duplicate {
            reported.push(reported[0]);
        } else {
            reported.pop();
        }

        let mut stream = Vec::new();
        write_mem_record(&mut stream, &q, &MatchSet::new(reported)).unwrap();

        let report = validate(Cursor::new(stream), &s, l).next().unwrap().unwrap();
        prop_assert_eq!(report.verdict, Verdict::Wrong);
        prop_assert!(!report.diff.is_empty());
    }
}
