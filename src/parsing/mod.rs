//! Parsers for the inputs of enumeration and validation.
//!
//! This module provides parsers for:
//!
//! - **Reference files**: one header line followed by sequence lines, concatenated
//! - **Query files**: FASTA, FASTQ, or one raw query per line
//! - **MEM result streams**: queries interleaved with externally computed matches
//!
//! Every file input may be gzip/bgzip compressed (`.gz`, `.bgz`) and `-` reads
//! from standard input.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mem_oracle::parsing::{mems::MemRecordReader, open_input, reference::read_reference};
//! use std::path::Path;
//!
//! let reference = read_reference(Path::new("reference.fa")).unwrap();
//! for record in MemRecordReader::new(open_input(Path::new("results.txt")).unwrap()) {
//!     let record = record.unwrap();
//!     println!("query {} has {} reported matches", record.index, record.matches.len());
//! }
//! # let _ = reference;
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod mems;
pub mod queries;
pub mod reference;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed match line {line}: '{content}' (expected three tab-separated integers)")]
    MalformedInput { line: usize, content: String },

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub(crate) fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a file (or stdin for `-`) as a buffered reader, decompressing gzip by extension.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
