use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::occurrences::find_occurrences;
use crate::parsing::queries::{read_queries, QueryFormat};
use crate::parsing::reference::read_reference;

#[derive(Args)]
pub struct FindArgs {
    /// Reference file: one header line followed by sequence lines
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Query file (FASTA, FASTQ, or one query per line; '-' for stdin)
    #[arg(required = true)]
    pub queries: PathBuf,

    /// Report overlapping occurrences instead of resuming after each hit
    #[arg(long)]
    pub overlapping: bool,

    /// Query file format (auto-detected by default)
    #[arg(long, value_enum)]
    pub query_format: Option<QueryFormat>,
}

/// Execute find subcommand
///
/// # Errors
///
/// Returns an error if the reference or queries cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FindArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reference = read_reference(&args.reference).with_context(|| {
        format!("Failed to read reference {}", args.reference.display())
    })?;
    let queries = read_queries(&args.queries, args.query_format)
        .with_context(|| format!("Failed to read queries {}", args.queries.display()))?;

    if verbose {
        eprintln!(
            "Reference: {} symbols, {} queries",
            reference.len(),
            queries.len()
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut results = Vec::new();

    if matches!(format, OutputFormat::Tsv) {
        writeln!(out, "query_index\tquery\toffset")?;
    }

    for (i, query) in queries.iter().enumerate() {
        let hits = find_occurrences(&reference, query, args.overlapping);

        match format {
            OutputFormat::Text => writeln!(out, "Query {} {}", i + 1, format_offsets(&hits))?,
            OutputFormat::Tsv => {
                for hit in &hits {
                    writeln!(out, "{}\t{query}\t{hit}", i + 1)?;
                }
            }
            OutputFormat::Json => results.push(serde_json::json!({
                "index": i + 1,
                "query": query,
                "offsets": hits,
            })),
        }
    }

    if matches!(format, OutputFormat::Json) {
        writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
    }
    out.flush()?;

    Ok(())
}

/// Bracketed, comma-separated offsets, e.g. `[0, 4]`
fn format_offsets(offsets: &[usize]) -> String {
    let joined: Vec<String> = offsets.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}
