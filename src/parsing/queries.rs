//! Parser for query files using noodles.
//!
//! Queries may be given as:
//! - FASTA (`.fa`, `.fasta`, `.fna`)
//! - FASTQ (`.fq`, `.fastq`); qualities are ignored
//! - plain text, one query per non-blank line
//!
//! All of the above may additionally be gzip/bgzip compressed.

use std::ffi::OsStr;
use std::io::BufRead;
use std::path::Path;

use noodles::{fasta, fastq};

use crate::core::sequence::Sequence;
use crate::parsing::{is_gzipped, open_input, ParseError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum QueryFormat {
    Fasta,
    Fastq,
    Lines,
}

impl QueryFormat {
    /// Detect the format from the file extension, ignoring a compression suffix
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        let inner = if is_gzipped(path) {
            path.file_stem().map(Path::new).unwrap_or(path)
        } else {
            path
        };

        match inner
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("fa" | "fasta" | "fna") => Self::Fasta,
            Some("fq" | "fastq") => Self::Fastq,
            _ => Self::Lines,
        }
    }
}

/// Read all queries from `path`, auto-detecting the format unless one is given.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or `ParseError::Noodles`
/// if a FASTA/FASTQ record is malformed.
pub fn read_queries(path: &Path, format: Option<QueryFormat>) -> Result<Vec<Sequence>, ParseError> {
    let format = format.unwrap_or_else(|| QueryFormat::detect(path));
    let reader = open_input(path)?;

    match format {
        QueryFormat::Fasta => parse_fasta_queries(reader),
        QueryFormat::Fastq => parse_fastq_queries(reader),
        QueryFormat::Lines => parse_line_queries(reader),
    }
}

/// Parse FASTA records; each record's full sequence is one query
pub fn parse_fasta_queries<R: BufRead>(reader: R) -> Result<Vec<Sequence>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut queries = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;
        queries.push(Sequence::new(record.sequence().as_ref().to_vec()));
    }

    Ok(queries)
}

/// Parse FASTQ records; each record's sequence is one query
pub fn parse_fastq_queries<R: BufRead>(reader: R) -> Result<Vec<Sequence>, ParseError> {
    let mut fastq_reader = fastq::io::Reader::new(reader);
    let mut queries = Vec::new();

    for result in fastq_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTQ record: {e}")))?;
        queries.push(Sequence::new(record.sequence().to_vec()));
    }

    Ok(queries)
}

/// Parse one query per line, skipping blank lines
pub fn parse_line_queries<R: BufRead>(reader: R) -> Result<Vec<Sequence>, ParseError> {
    let mut queries = Vec::new();

    for line in reader.split(b'\n') {
        let line = line?;
        let trimmed = line.trim_ascii();
        if !trimmed.is_empty() {
            queries.push(Sequence::new(trimmed.to_vec()));
        }
    }

    Ok(queries)
}
