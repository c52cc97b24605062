use std::io::BufRead;

use serde::Serialize;
use tracing::debug;

use crate::core::sequence::Sequence;
use crate::core::types::{MatchSet, MinLength, Verdict};
use crate::matching::bruteforce::find_mems;
use crate::matching::diagnosis::MatchSetDiff;
use crate::parsing::mems::{MemRecordReader, QueryRecord};
use crate::parsing::ParseError;

/// Result of cross-validating one query
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    /// 1-based position of the query in the result stream
    pub index: usize,

    /// 1-based line number of the query in the result stream
    pub line: usize,

    pub query: Sequence,

    /// Brute-force matches, canonically sorted
    pub expected: MatchSet,

    /// Externally reported matches, canonically sorted
    pub actual: MatchSet,

    pub verdict: Verdict,

    /// Multiset difference, empty when the verdict is `ALL_OK`
    pub diff: MatchSetDiff,
}

/// Counts of verdicts over a validation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub queries: usize,
    pub all_ok: usize,
    pub wrong: usize,
}

impl ValidationSummary {
    pub fn record(&mut self, report: &QueryReport) {
        self.queries += 1;
        match report.verdict {
            Verdict::AllOk => self.all_ok += 1,
            Verdict::Wrong => self.wrong += 1,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.wrong == 0
    }
}

/// Re-derives matches for each query and compares them with reported ones
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    reference: &'a Sequence,
    min_length: MinLength,
}

impl<'a> Validator<'a> {
    #[must_use]
    pub fn new(reference: &'a Sequence, min_length: MinLength) -> Self {
        Self {
            reference,
            min_length,
        }
    }

    /// Validate a single record.
    ///
    /// Both lists are sorted canonically and compared element by element, so
    /// the verdict is `ALL_OK` exactly when they hold the same triples with the
    /// same multiplicities.
    #[must_use]
    pub fn check(&self, record: QueryRecord) -> QueryReport {
        let expected =
            find_mems(self.reference, &record.query, self.min_length).into_canonical();
        let actual = record.matches.into_canonical();

        let verdict = Verdict::from_agreement(expected.as_slice() == actual.as_slice());
        let diff = if verdict.is_ok() {
            MatchSetDiff::default()
        } else {
            MatchSetDiff::analyze(
                self.reference,
                &record.query,
                self.min_length,
                &expected,
                &actual,
            )
        };

        debug!(
            query = record.index,
            line = record.line,
            expected = expected.len(),
            actual = actual.len(),
            %verdict,
            "Validated query"
        );

        QueryReport {
            index: record.index,
            line: record.line,
            query: record.query,
            expected,
            actual,
            verdict,
            diff,
        }
    }

    /// Validate every record of a parsed stream, lazily and in order.
    ///
    /// A parse error is passed through and ends the iteration.
    pub fn validate<I>(
        &self,
        records: I,
    ) -> impl Iterator<Item = Result<QueryReport, ParseError>> + 'a
    where
        I: IntoIterator<Item = Result<QueryRecord, ParseError>> + 'a,
        I::IntoIter: 'a,
    {
        let validator = *self;
        records
            .into_iter()
            .map(move |record| record.map(|r| validator.check(r)))
    }
}

/// Cross-validate a result stream read from `reader` against `reference`.
pub fn validate<'a, R: BufRead + 'a>(
    reader: R,
    reference: &'a Sequence,
    min_length: MinLength,
) -> impl Iterator<Item = Result<QueryReport, ParseError>> + 'a {
    Validator::new(reference, min_length).validate(MemRecordReader::new(reader))
}
