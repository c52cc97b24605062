//! # mem-oracle
//!
//! A brute-force reference implementation for checking maximal exact match (MEM) finders.
//!
//! Indexed MEM finders (suffix arrays, FM-indexes, sparse suffix arrays) are fast but
//! easy to get subtly wrong at sequence boundaries and around repeats. `mem-oracle`
//! enumerates every maximal exact match the slow, obvious way and compares the
//! result, query by query, with what another tool reported.
//!
//! ## Features
//!
//! - **Exhaustive enumeration**: every left-maximal start pair is extended to its full length
//! - **Cross-validation**: per-query `ALL_OK` / `WRONG` verdicts with multiset comparison
//! - **Discrepancy diagnosis**: missing, duplicate, non-maximal and below-threshold triples
//! - **Streaming input**: result streams are validated one record at a time
//!
//! ## Example
//!
//! ```rust
//! use mem_oracle::matching::validator::validate;
//! use mem_oracle::{MinLength, Sequence, Verdict};
//! use std::io::Cursor;
//!
//! let reference = Sequence::from("ACGTACGT");
//! let stream = Cursor::new("ACGT\n4\t0\t0\n4\t0\t4\n\n");
//!
//! for report in validate(stream, &reference, MinLength::new(4).unwrap()) {
//!     let report = report.unwrap();
//!     assert_eq!(report.verdict, Verdict::AllOk);
//!     println!("Query {} {}", report.index, report.verdict);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequences, matches, match sets and verdicts
//! - [`matching`]: Brute-force enumeration, validation and diagnosis
//! - [`parsing`]: Reference, query and result-stream parsers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::sequence::Sequence;
pub use crate::core::types::*;
pub use matching::bruteforce::find_mems;
pub use matching::validator::{QueryReport, Validator};
