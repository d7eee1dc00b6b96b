use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, error::ErrorKind};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{DefectRates, RngMode, SynthesizerConfig};
use crate::constants::config::{DEFAULT_BATCH_SIZE, DEFAULT_OUTPUT_PATH, DEFAULT_RECORDS};
use crate::sink::CsvSink;
use crate::synthesizer::Synthesizer;
use crate::types::Seed;

#[derive(Debug, Parser)]
#[command(
    name = "messy-sales",
    version,
    disable_help_subcommand = true,
    about = "Generate sales records with realistic data-quality defects",
    long_about = "Generate a CSV of synthetic sales records with injected defects (sentinel prices and quantities, outliers, padded strings, mixed date formats, blank fields, duplicate rows). Output is reproducible for a given seed and anchor date.",
    after_help = "RUST_LOG overrides the log filter chosen by --verbose/--quiet."
)]
/// CLI for `messy-sales`.
///
/// Common usage:
/// - Default run: `messy-sales` writes 5000 records to `sales_data.csv`
/// - Reproducible run: `messy-sales --seed 7 --anchor-date 2026-01-31`
/// - Clean baseline: `messy-sales --clean --records 100`
struct SynthesizeCli {
    #[arg(
        long,
        default_value_t = DEFAULT_RECORDS,
        value_parser = parse_positive_usize,
        help = "Number of logical records to generate (duplicates excluded)"
    )]
    records: usize,
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_PATH,
        help = "CSV output path"
    )]
    output: PathBuf,
    #[arg(long, help = "Deterministic seed; drawn from entropy and logged when omitted")]
    seed: Option<Seed>,
    #[arg(
        long = "anchor-date",
        value_name = "YYYY-MM-DD",
        value_parser = parse_anchor_date,
        help = "Last day of the two-year order-date window (defaults to today)"
    )]
    anchor_date: Option<NaiveDate>,
    #[arg(
        long = "per-record-rng",
        help = "Give each record its own random substream and build batches in parallel"
    )]
    per_record_rng: bool,
    #[arg(
        long = "batch-size",
        default_value_t = DEFAULT_BATCH_SIZE,
        value_parser = parse_positive_usize,
        help = "Records built per parallel batch with --per-record-rng"
    )]
    batch_size: usize,
    #[arg(long, help = "Disable every probabilistic defect (dates still use mixed formats)")]
    clean: bool,
    #[arg(
        long,
        value_name = "PATH",
        help = "Optional path for a JSON summary of injected defects"
    )]
    report: Option<PathBuf>,
    #[arg(short, long, conflicts_with = "quiet", help = "Enable debug logging")]
    verbose: bool,
    #[arg(short, long, help = "Only log errors")]
    quiet: bool,
}

impl SynthesizeCli {
    fn into_config(self) -> (SynthesizerConfig, Option<PathBuf>) {
        let config = SynthesizerConfig {
            records: self.records,
            output: self.output,
            seed: self.seed,
            anchor_date: self.anchor_date,
            rng_mode: if self.per_record_rng {
                RngMode::PerRecord
            } else {
                RngMode::Sequential
            },
            batch_size: self.batch_size,
            rates: if self.clean {
                DefectRates::none()
            } else {
                DefectRates::default()
            },
        };
        (config, self.report)
    }
}

/// Parse arguments (without the program name), generate the CSV, and log a summary.
pub fn run_synthesize<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let Some(cli) = parse_cli::<SynthesizeCli, _>(
        std::iter::once("messy-sales".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };
    init_logging(cli.verbose, cli.quiet);

    let (config, report_path) = cli.into_config();
    let synthesizer = Synthesizer::new(&config)?;
    let report = CsvSink::create(&config.output)
        .and_then(|sink| synthesizer.synthesize(config.records, sink))
        .inspect_err(|err| {
            error!(output = %config.output.display(), error = %err, "could not write sales data")
        })?;

    info!(
        output = %config.output.display(),
        seed = report.seed,
        price_sentinel_rate = report.corruption_rate("price_sentinel"),
        quantity_sentinel_rate = report.corruption_rate("quantity_sentinel"),
        quantity_outlier_rate = report.corruption_rate("quantity_outlier"),
        duplicate_rate = report.duplicate_rate(),
        blank_rate = report.blank_rate(),
        "wrote messy sales data"
    );
    if let Some(path) = report_path {
        report.write_json(&path)?;
        info!(path = %path.display(), "wrote defect report");
    }
    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let fallback = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A subscriber may already be installed when embedded (tests, host apps).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .parse::<usize>()
        .map_err(|_| format!("Could not parse '{}' as a positive integer", raw))?;
    if parsed == 0 {
        return Err("value must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_anchor_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("invalid anchor date '{}': {err} (expected YYYY-MM-DD)", raw))
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
