use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::{debug, info, warn};

use crate::cli::OutputFormat;
use crate::core::types::{MinLength, Verdict};
use crate::matching::validator::{validate, QueryReport, ValidationSummary};
use crate::parsing::open_input;
use crate::parsing::reference::read_reference;

#[derive(Args)]
pub struct ValidateArgs {
    /// Reference file: one header line followed by sequence lines
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Result stream from the MEM finder under test ('-' for stdin)
    #[arg(required = true)]
    pub results: PathBuf,

    /// Minimum match length the MEM finder was run with
    #[arg(short = 'l', long)]
    pub min_length: MinLength,

    /// Write the query and both match lists of every WRONG query to this file
    /// instead of standard error
    #[arg(short, long)]
    pub errors: Option<PathBuf>,

    /// Exit with an error after processing all queries if any was WRONG
    #[arg(long)]
    pub strict: bool,
}

/// Execute validate subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be read, the result stream is malformed,
/// or `--strict` is set and at least one query was WRONG.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ValidateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reference = read_reference(&args.reference).with_context(|| {
        format!("Failed to read reference {}", args.reference.display())
    })?;

    if verbose {
        eprintln!(
            "Reference: {} symbols, minimum match length {}",
            reference.len(),
            args.min_length
        );
    }

    let input = open_input(&args.results)
        .with_context(|| format!("Failed to open results {}", args.results.display()))?;

    let mut diagnostics: Box<dyn Write> = match &args.errors {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stderr()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut summary = ValidationSummary::default();
    let mut reports = Vec::new();

    if matches!(format, OutputFormat::Tsv) {
        write_tsv_header(&mut out)?;
    }

    for report in validate(input, &reference, args.min_length) {
        let report = report
            .with_context(|| format!("Failed to parse results {}", args.results.display()))?;
        summary.record(&report);

        if report.verdict == Verdict::Wrong {
            debug!(
                "Query {} WRONG (line {}): {}",
                report.index, report.line, report.query
            );
            write_diagnostic(&mut diagnostics, &report)?;
        }

        match format {
            OutputFormat::Text => write_text_report(&mut out, &report)?,
            OutputFormat::Tsv => write_tsv_row(&mut out, &report)?,
            OutputFormat::Json => reports.push(report),
        }
    }

    if matches!(format, OutputFormat::Json) {
        let output = serde_json::json!({
            "min_length": args.min_length,
            "summary": summary,
            "queries": reports,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    }
    out.flush()?;

    diagnostics.flush()?;

    info!(
        "Validated {} queries: {} ALL_OK, {} WRONG",
        summary.queries, summary.all_ok, summary.wrong
    );
    if summary.queries == 0 {
        warn!("No queries found in {}", args.results.display());
    }

    if args.strict && !summary.all_passed() {
        anyhow::bail!(
            "{} of {} queries WRONG",
            summary.wrong,
            summary.queries
        );
    }

    Ok(())
}

/// Status line followed by the reported (`R:`) and computed (`C:`) lists and a blank line
pub(crate) fn write_text_report<W: Write>(out: &mut W, report: &QueryReport) -> io::Result<()> {
    writeln!(out, "Query {} {}", report.index, report.verdict)?;
    writeln!(out, "R: {}", report.actual)?;
    writeln!(out, "C: {}", report.expected)?;
    writeln!(out)
}

/// Query followed by the reported (`R:`) and computed (`C:`) lists and a blank line
pub(crate) fn write_diagnostic<W: Write>(out: &mut W, report: &QueryReport) -> io::Result<()> {
    writeln!(out, "{}", report.query)?;
    writeln!(out, "R: {}", report.actual)?;
    writeln!(out, "C: {}", report.expected)?;
    writeln!(out)
}

fn write_tsv_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "query_index\tverdict\tquery\texpected_count\tactual_count\tmissing\tunexpected"
    )
}

fn write_tsv_row<W: Write>(out: &mut W, report: &QueryReport) -> io::Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        report.index,
        report.verdict,
        report.query,
        report.expected.len(),
        report.actual.len(),
        report.diff.missing.len(),
        report.diff.unexpected.len(),
    )
}
