use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::sequence::Sequence;
use crate::core::types::{Match, MatchSet, MinLength};
use crate::matching::bruteforce::is_maximal_match;

/// Why an externally reported match has no counterpart in the computed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    /// Window is out of bounds, not identical, or extendable
    NotMaximal,
    /// A genuine maximal match, but shorter than the threshold
    BelowThreshold,
    /// A genuine match reported more times than it occurs
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnexpectedMatch {
    #[serde(flatten)]
    pub found: Match,
    pub kind: DiscrepancyKind,
}

/// Multiset difference between the computed (expected) and external (actual) matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchSetDiff {
    /// Computed matches the external tool did not report, in canonical order
    pub missing: Vec<Match>,

    /// External matches not accounted for by the computed set, in canonical order
    pub unexpected: Vec<UnexpectedMatch>,
}

impl MatchSetDiff {
    /// Compare `actual` against `expected`, counting each triple's multiplicity.
    #[must_use]
    pub fn analyze(
        reference: &Sequence,
        query: &Sequence,
        min_length: MinLength,
        expected: &MatchSet,
        actual: &MatchSet,
    ) -> Self {
        let mut balance: BTreeMap<Match, i64> = BTreeMap::new();
        for m in expected {
            *balance.entry(*m).or_default() += 1;
        }
        for m in actual {
            *balance.entry(*m).or_default() -= 1;
        }

        let mut diff = Self::default();
        for (m, count) in balance {
            if count > 0 {
                diff.missing
                    .extend(std::iter::repeat(m).take(count.unsigned_abs() as usize));
            } else if count < 0 {
                let kind = Self::classify(reference, query, min_length, expected, &m);
                diff.unexpected.extend(
                    std::iter::repeat(UnexpectedMatch { found: m, kind })
                        .take(count.unsigned_abs() as usize),
                );
            }
        }

        diff
    }

    fn classify(
        reference: &Sequence,
        query: &Sequence,
        min_length: MinLength,
        expected: &MatchSet,
        m: &Match,
    ) -> DiscrepancyKind {
        if expected.contains(m) {
            DiscrepancyKind::Duplicate
        } else if !is_maximal_match(reference, query, m) {
            DiscrepancyKind::NotMaximal
        } else if m.length < min_length.get() {
            DiscrepancyKind::BelowThreshold
        } else {
            // A maximal match at or above the threshold is always computed, so
            // an external copy beyond the computed ones is an extra report.
            DiscrepancyKind::Duplicate
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::bruteforce::find_mems;

    fn setup() -> (Sequence, Sequence, MinLength) {
        (
            Sequence::from("ACGTACGT"),
            Sequence::from("ACGT"),
            MinLength::new(4).unwrap(),
        )
    }

    #[test]
    fn test_identical_sets_have_no_diff() {
        let (s, q, l) = setup();
        let expected = find_mems(&s, &q, l);
        let actual = MatchSet::new(vec![Match::new(4, 0, 4), Match::new(4, 0, 0)]);

        let diff = MatchSetDiff::analyze(&s, &q, l, &expected, &actual);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_missing_match() {
        let (s, q, l) = setup();
        let expected = find_mems(&s, &q, l);
        let actual = MatchSet::new(vec![Match::new(4, 0, 0)]);

        let diff = MatchSetDiff::analyze(&s, &q, l, &expected, &actual);
        assert_eq!(diff.missing, vec![Match::new(4, 0, 4)]);
        assert!(diff.unexpected.is_empty());
    }

    #[test]
    fn test_unexpected_kinds() {
        let (s, q, l) = setup();
        let expected = find_mems(&s, &q, l);
        let actual = MatchSet::new(vec![
            Match::new(4, 0, 0),
            Match::new(4, 0, 0),
            Match::new(4, 0, 4),
            Match::new(3, 0, 0),
        ]);

        let diff = MatchSetDiff::analyze(&s, &q, l, &expected, &actual);
        assert!(diff.missing.is_empty());
        assert_eq!(
            diff.unexpected,
            vec![
                UnexpectedMatch {
                    found: Match::new(3, 0, 0),
                    kind: DiscrepancyKind::NotMaximal,
                },
                UnexpectedMatch {
                    found: Match::new(4, 0, 0),
                    kind: DiscrepancyKind::Duplicate,
                },
            ]
        );
    }

    #[test]
    fn test_below_threshold() {
        let s = Sequence::from("ACGTTT");
        let q = Sequence::from("ACGAAA");
        let l = MinLength::new(4).unwrap();
        let expected = find_mems(&s, &q, l);
        let actual = MatchSet::new(vec![Match::new(3, 0, 0)]);

        let diff = MatchSetDiff::analyze(&s, &q, l, &expected, &actual);
        assert_eq!(diff.unexpected[0].kind, DiscrepancyKind::BelowThreshold);
    }
}
