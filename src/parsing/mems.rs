//! Reader and writer for MEM result streams.
//!
//! A result stream interleaves queries with the matches an external MEM finder
//! reported for them:
//!
//! ```text
//! ACGT
//! 4	0	0
//! 4	0	4
//!
//! TTGA
//!
//! ```
//!
//! Each record is a query line followed by zero or more `length\tquery_offset\treference_offset`
//! lines, terminated by a blank line or the end of the stream. Blank lines between
//! records are skipped. Leading and trailing whitespace on every line is ignored.

use std::io::{BufRead, Write};

use crate::core::sequence::Sequence;
use crate::core::types::{Match, MatchSet};
use crate::parsing::ParseError;

/// One query and the matches reported for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    /// 1-based position of the record in the stream
    pub index: usize,

    /// 1-based line number of the query line
    pub line: usize,

    pub query: Sequence,

    /// Matches as reported, in stream order
    pub matches: MatchSet,
}

enum State {
    ReadQuery,
    ReadMatchLine(QueryRecord),
    EndOfRecord(QueryRecord),
}

/// Streaming parser over a result stream, yielding one [`QueryRecord`] at a time.
///
/// The iterator is fused: after the end of input or the first error it only
/// returns `None`.
pub struct MemRecordReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
    records_read: usize,
    done: bool,
}

impl<R: BufRead> MemRecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_number: 0,
            records_read: 0,
            done: false,
        }
    }

    /// Next trimmed line, or `None` at end of stream. Lines are raw bytes;
    /// only match lines need to be valid UTF-8.
    fn next_line(&mut self) -> Result<Option<Vec<u8>>, ParseError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(self.buf.trim_ascii().to_vec()))
    }

    fn fail(&mut self, err: ParseError) -> Option<Result<QueryRecord, ParseError>> {
        self.done = true;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for MemRecordReader<R> {
    type Item = Result<QueryRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut state = State::ReadQuery;
        loop {
            state = match state {
                State::ReadQuery => match self.next_line() {
                    Ok(Some(line)) if line.is_empty() => State::ReadQuery,
                    Ok(Some(line)) => {
                        self.records_read += 1;
                        State::ReadMatchLine(QueryRecord {
                            index: self.records_read,
                            line: self.line_number,
                            query: Sequence::from(line),
                            matches: MatchSet::default(),
                        })
                    }
                    Ok(None) => {
                        self.done = true;
                        return None;
                    }
                    Err(e) => return self.fail(e),
                },
                State::ReadMatchLine(mut record) => match self.next_line() {
                    Ok(None) => State::EndOfRecord(record),
                    Ok(Some(line)) if line.is_empty() => State::EndOfRecord(record),
                    Ok(Some(line)) => match parse_match_bytes(&line, self.line_number) {
                        Ok(m) => {
                            record.matches.push(m);
                            State::ReadMatchLine(record)
                        }
                        Err(e) => return self.fail(e),
                    },
                    Err(e) => return self.fail(e),
                },
                State::EndOfRecord(record) => return Some(Ok(record)),
            };
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for MemRecordReader<R> {}

fn parse_match_bytes(line: &[u8], line_number: usize) -> Result<Match, ParseError> {
    match std::str::from_utf8(line) {
        Ok(text) => parse_match_line(text, line_number),
        Err(_) => Err(ParseError::MalformedInput {
            line: line_number,
            content: String::from_utf8_lossy(line).into_owned(),
        }),
    }
}

/// Parse a `length\tquery_offset\treference_offset` line.
///
/// # Errors
///
/// Returns `ParseError::MalformedInput` unless the line holds exactly three
/// tab-separated non-negative integers.
pub fn parse_match_line(line: &str, line_number: usize) -> Result<Match, ParseError> {
    let malformed = || ParseError::MalformedInput {
        line: line_number,
        content: line.to_string(),
    };

    let fields: Vec<&str> = line.trim().split('\t').collect();
    if fields.len() != 3 {
        return Err(malformed());
    }

    let mut values = [0usize; 3];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field.trim().parse().map_err(|_| malformed())?;
    }

    Ok(Match::new(values[0], values[1], values[2]))
}

/// Write one record in result-stream form: query line, one line per match, blank line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_mem_record<W: Write>(
    out: &mut W,
    query: &Sequence,
    matches: &MatchSet,
) -> std::io::Result<()> {
    out.write_all(query.as_bytes())?;
    writeln!(out)?;
    for m in matches {
        writeln!(out, "{}", m.to_tsv())?;
    }
    writeln!(out)
}
