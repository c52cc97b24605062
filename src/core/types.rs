use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A maximal exact match between a query and the reference.
///
/// Field order is the canonical sort order: length, then query offset,
/// then reference offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Match {
    /// Number of matching symbols
    pub length: usize,
    /// Start offset in the query
    pub query_offset: usize,
    /// Start offset in the reference
    pub reference_offset: usize,
}

impl Match {
    #[must_use]
    pub fn new(length: usize, query_offset: usize, reference_offset: usize) -> Self {
        Self {
            length,
            query_offset,
            reference_offset,
        }
    }

    /// Tab-separated `length\tquery_offset\treference_offset`, the result stream form
    #[must_use]
    pub fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}",
            self.length, self.query_offset, self.reference_offset
        )
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.length, self.query_offset, self.reference_offset
        )
    }
}

impl From<(usize, usize, usize)> for Match {
    fn from((length, query_offset, reference_offset): (usize, usize, usize)) -> Self {
        Self::new(length, query_offset, reference_offset)
    }
}

/// All matches reported for one query.
///
/// Comparison is multiset equality: two sets are equal when their canonically
/// sorted lists are equal, so duplicate triples are significant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchSet {
    matches: Vec<Match>,
}

impl MatchSet {
    #[must_use]
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    pub fn push(&mut self, m: Match) {
        self.matches.push(m);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Match] {
        &self.matches
    }

    #[must_use]
    pub fn contains(&self, m: &Match) -> bool {
        self.matches.contains(m)
    }

    /// Sort in place into canonical order
    pub fn sort_canonical(&mut self) {
        self.matches.sort_unstable();
    }

    /// Consume and return the set in canonical order
    #[must_use]
    pub fn into_canonical(mut self) -> Self {
        self.sort_canonical();
        self
    }

    /// Multiset equality, independent of the current order of either side
    #[must_use]
    pub fn same_matches(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut a = self.matches.clone();
        let mut b = other.matches.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

impl PartialEq for MatchSet {
    fn eq(&self, other: &Self) -> bool {
        self.same_matches(other)
    }
}

impl Eq for MatchSet {}

impl FromIterator<Match> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Match>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for MatchSet {
    type Item = Match;
    type IntoIter = std::vec::IntoIter<Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Renders as a bracketed list of triples, e.g. `[(4, 0, 0), (4, 0, 4)]`.
/// Downstream consumers of the diagnostic text parse this form.
impl fmt::Display for MatchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, m) in self.matches.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{m}")?;
        }
        write!(f, "]")
    }
}

/// Outcome of comparing a computed match set with an external one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Both lists agree after canonical sorting
    AllOk,
    /// The lists differ
    Wrong,
}

impl Verdict {
    #[must_use]
    pub fn from_agreement(agree: bool) -> Self {
        if agree {
            Self::AllOk
        } else {
            Self::Wrong
        }
    }

    #[must_use]
    pub fn is_ok(self) -> bool {
        matches!(self, Self::AllOk)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllOk => write!(f, "ALL_OK"),
            Self::Wrong => write!(f, "WRONG"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("Minimum match length must be at least 1, got {0}")]
    NonPositive(i64),

    #[error("Invalid minimum match length: '{0}'")]
    NotANumber(String),
}

/// Minimum match length threshold (L). Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MinLength(usize);

impl MinLength {
    /// Validate a raw threshold
    ///
    /// # Errors
    ///
    /// Returns `ThresholdError::NonPositive` when `value < 1`.
    pub fn new(value: i64) -> Result<Self, ThresholdError> {
        if value < 1 {
            return Err(ThresholdError::NonPositive(value));
        }
        usize::try_from(value)
            .map(Self)
            .map_err(|_| ThresholdError::NotANumber(value.to_string()))
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for MinLength {
    fn default() -> Self {
        Self(1)
    }
}

impl FromStr for MinLength {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ThresholdError::NotANumber(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for MinLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_canonical_order() {
        let mut matches = [
            Match::new(4, 0, 4),
            Match::new(2, 1, 0),
            Match::new(4, 0, 0),
            Match::new(2, 0, 3),
        ];
        matches.sort();
        assert_eq!(
            matches,
            [
                Match::new(2, 0, 3),
                Match::new(2, 1, 0),
                Match::new(4, 0, 0),
                Match::new(4, 0, 4),
            ]
        );
    }

    #[test]
    fn test_match_display() {
        let m = Match::new(4, 0, 12);
        assert_eq!(m.to_string(), "(4, 0, 12)");
        assert_eq!(m.to_tsv(), "4\t0\t12");
    }

    #[test]
    fn test_match_set_display() {
        let set = MatchSet::new(vec![Match::new(4, 0, 0), Match::new(4, 0, 4)]);
        assert_eq!(set.to_string(), "[(4, 0, 0), (4, 0, 4)]");
        assert_eq!(MatchSet::default().to_string(), "[]");
    }

    #[test]
    fn test_match_set_equality_ignores_order() {
        let a = MatchSet::new(vec![Match::new(4, 0, 4), Match::new(4, 0, 0)]);
        let b = MatchSet::new(vec![Match::new(4, 0, 0), Match::new(4, 0, 4)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_match_set_equality_counts_duplicates() {
        let a = MatchSet::new(vec![Match::new(4, 0, 0), Match::new(4, 0, 0)]);
        let b = MatchSet::new(vec![Match::new(4, 0, 0)]);
        assert_ne!(a, b);

        let c = MatchSet::new(vec![Match::new(4, 0, 0), Match::new(4, 0, 4)]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_into_canonical() {
        let set = MatchSet::new(vec![Match::new(3, 1, 1), Match::new(1, 0, 0)]).into_canonical();
        assert_eq!(set.as_slice(), &[Match::new(1, 0, 0), Match::new(3, 1, 1)]);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::AllOk.to_string(), "ALL_OK");
        assert_eq!(Verdict::Wrong.to_string(), "WRONG");
        assert_eq!(Verdict::from_agreement(true), Verdict::AllOk);
        assert!(!Verdict::from_agreement(false).is_ok());
    }

    #[test]
    fn test_verdict_serializes_screaming_case() {
        assert_eq!(serde_json::to_string(&Verdict::AllOk).unwrap(), "\"ALL_OK\"");
        assert_eq!(serde_json::to_string(&Verdict::Wrong).unwrap(), "\"WRONG\"");
    }

    #[test]
    fn test_min_length_rejects_non_positive() {
        assert_eq!(MinLength::new(0), Err(ThresholdError::NonPositive(0)));
        assert_eq!(MinLength::new(-3), Err(ThresholdError::NonPositive(-3)));
        assert_eq!(MinLength::new(1).map(MinLength::get), Ok(1));
    }

    #[test]
    fn test_min_length_from_str() {
        assert_eq!("20".parse::<MinLength>().map(MinLength::get), Ok(20));
        assert!("0".parse::<MinLength>().is_err());
        assert!(matches!(
            "abc".parse::<MinLength>(),
            Err(ThresholdError::NotANumber(_))
        ));
    }
}
