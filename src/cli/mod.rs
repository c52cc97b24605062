//! Command-line interface for mem-oracle.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **enumerate**: List every maximal exact match of each query against a reference
//! - **validate**: Check a MEM finder's result stream against brute-force enumeration
//! - **find**: Report where each query occurs in full in the reference
//!
//! ## Usage
//!
//! ```text
//! # Validate a MEM finder's output, keeping diagnostics for WRONG queries
//! mem-oracle validate reference.fa results.txt -l 20 --errors wrong.txt
//!
//! # Pipe the finder's output straight in
//! memer reference.fa reference.sa queries.fq 1 20 | mem-oracle validate reference.fa - -l 20
//!
//! # Produce a result stream from the brute-force search itself
//! mem-oracle enumerate reference.fa queries.fa -l 20 > expected.txt
//!
//! # Exact occurrences of each query
//! mem-oracle find reference.fa queries.txt --overlapping
//! ```

use clap::{Parser, Subcommand};

pub mod enumerate;
pub mod find;
pub mod validate;

#[derive(Parser)]
#[command(name = "mem-oracle")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Brute-force maximal exact match enumeration and validation")]
#[command(
    long_about = "mem-oracle enumerates maximal exact matches (MEMs) between a reference and \
query sequences by brute force.\n\n\
It is meant as a source of truth for testing faster, index-based MEM finders:\n\
- Every left-maximal start pair is extended as far as it goes\n\
- Result streams from another tool are compared query by query\n\
- WRONG queries are reported with both match lists and a breakdown of the differences"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enumerate maximal exact matches of each query against a reference
    Enumerate(enumerate::EnumerateArgs),

    /// Validate a MEM result stream against brute-force enumeration
    Validate(validate::ValidateArgs),

    /// Find exact occurrences of each query in a reference
    Find(find::FindArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
