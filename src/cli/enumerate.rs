use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::core::sequence::Sequence;
use crate::core::types::{MatchSet, MinLength};
use crate::matching::bruteforce::find_mems;
use crate::parsing::mems::write_mem_record;
use crate::parsing::queries::{read_queries, QueryFormat};
use crate::parsing::reference::read_reference;

#[derive(Args)]
pub struct EnumerateArgs {
    /// Reference file: one header line followed by sequence lines
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Query file (FASTA, FASTQ, or one query per line; '-' for stdin)
    #[arg(required = true)]
    pub queries: PathBuf,

    /// Minimum length of reported matches
    #[arg(short = 'l', long, default_value = "1")]
    pub min_length: MinLength,

    /// Query file format (auto-detected by default)
    #[arg(long, value_enum)]
    pub query_format: Option<QueryFormat>,
}

/// Execute enumerate subcommand
///
/// Text output is a result stream (query line, `length\tquery_offset\treference_offset`
/// lines, blank line) that `validate` accepts as-is.
///
/// # Errors
///
/// Returns an error if the reference or queries cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: EnumerateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reference = read_reference(&args.reference).with_context(|| {
        format!("Failed to read reference {}", args.reference.display())
    })?;
    let queries = read_queries(&args.queries, args.query_format)
        .with_context(|| format!("Failed to read queries {}", args.queries.display()))?;

    if verbose {
        eprintln!(
            "Reference: {} symbols, {} queries, minimum match length {}",
            reference.len(),
            queries.len(),
            args.min_length
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let started = Instant::now();
    let mut total = 0;
    let mut results = Vec::new();

    if matches!(format, OutputFormat::Tsv) {
        writeln!(out, "query_index\tlength\tquery_offset\treference_offset")?;
    }

    for (i, query) in queries.into_iter().enumerate() {
        let mems = find_mems(&reference, &query, args.min_length);
        debug!("Query {} ({} symbols): {} matches", i + 1, query.len(), mems.len());
        total += mems.len();

        match format {
            OutputFormat::Text => write_mem_record(&mut out, &query, &mems)?,
            OutputFormat::Tsv => write_tsv_rows(&mut out, i + 1, &mems)?,
            OutputFormat::Json => results.push(QueryMatches {
                index: i + 1,
                query,
                matches: mems,
            }),
        }
    }

    if matches!(format, OutputFormat::Json) {
        let output = serde_json::json!({
            "min_length": args.min_length,
            "queries": results,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    }
    out.flush()?;

    info!(
        "Found {total} matches in {} ms",
        started.elapsed().as_millis()
    );

    Ok(())
}

#[derive(serde::Serialize)]
struct QueryMatches {
    index: usize,
    query: Sequence,
    matches: MatchSet,
}

fn write_tsv_rows<W: Write>(out: &mut W, index: usize, mems: &MatchSet) -> io::Result<()> {
    for m in mems {
        writeln!(out, "{index}\t{}", m.to_tsv())?;
    }
    Ok(())
}
