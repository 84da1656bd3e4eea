// CallScope - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Wiring the parse -> filter -> summarise -> render -> export pipeline

use callscope::core::export::{export_csv, export_json};
use callscope::core::filter::{apply_filters, FilterCriteria};
use callscope::core::parser::{parse_records, ParseConfig};
use callscope::core::render::{render_summary, render_table};
use callscope::core::summary::summarize;
use callscope::util::constants;
use callscope::util::error::CallScopeError;
use callscope::util::logging;
use chrono::NaiveDate;
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// CallScope - Phone call-log export analyser.
///
/// Point CallScope at a call-log XML export to filter records by number,
/// contact name, and date range, and to summarise inbound and outbound
/// call counts and durations.
#[derive(Parser, Debug)]
#[command(name = "CallScope", version, about)]
struct Cli {
    /// Path to the call-log XML export.
    input: PathBuf,

    /// Keep records whose number contains this text (case-sensitive).
    #[arg(short = 'n', long = "number", value_name = "TEXT")]
    number: Option<String>,

    /// Keep records whose contact name contains this text (case-insensitive).
    #[arg(short = 'c', long = "contact", value_name = "TEXT")]
    contact: Option<String>,

    /// Start of the date range, YYYY-MM-DD (applied only together with --to).
    #[arg(long = "from", value_name = "DATE")]
    from: Option<NaiveDate>,

    /// End of the date range, YYYY-MM-DD (applied only together with --from).
    #[arg(long = "to", value_name = "DATE")]
    to: Option<NaiveDate>,

    /// Write the filtered records to PATH (default filtered_data.csv,
    /// or filtered_data.json with --format json).
    #[arg(short = 'o', long = "export", value_name = "PATH", num_args = 0..=1)]
    export: Option<Option<PathBuf>>,

    /// Export format.
    #[arg(long = "format", value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

impl Cli {
    /// Export target: the explicit PATH, or the format's conventional
    /// file name when --export was given bare.
    fn export_path(&self) -> Option<PathBuf> {
        self.export.as_ref().map(|path| {
            path.clone()
                .unwrap_or_else(|| PathBuf::from(self.format.default_file_name()))
        })
    }
}

/// Serialisation format for --export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Artifact name used when --export carries no path.
    fn default_file_name(self) -> &'static str {
        match self {
            Self::Csv => constants::DEFAULT_EXPORT_FILE_NAME,
            Self::Json => constants::DEFAULT_JSON_EXPORT_FILE_NAME,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    logging::init(cli.debug);

    tracing::info!(
        version = constants::APP_VERSION,
        input = %cli.input.display(),
        "CallScope starting"
    );

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Analysis failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CallScopeError> {
    // A single-sided range silently applies no date filter (the range is
    // two-or-nothing); warn so the dropped bound is at least visible.
    if cli.from.is_some() != cli.to.is_some() {
        tracing::warn!("Date range ignored: both --from and --to are required");
    }

    let content = fs::read_to_string(&cli.input).map_err(|source| CallScopeError::Io {
        path: cli.input.clone(),
        operation: "read",
        source,
    })?;

    let records = parse_records(&content, &ParseConfig::default())?;
    tracing::info!(records = records.len(), "Call-log export parsed");

    let criteria = FilterCriteria {
        number_contains: cli.number.clone(),
        name_contains: cli.contact.clone(),
        date_start: cli.from,
        date_end: cli.to,
    };
    let filtered = apply_filters(&records, &criteria);
    let summary = summarize(&filtered);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_summary(&summary, &mut out).map_err(|source| CallScopeError::Render { source })?;
    writeln!(out).map_err(|source| CallScopeError::Render { source })?;
    render_table(&filtered, &mut out).map_err(|source| CallScopeError::Render { source })?;

    if let Some(path) = cli.export_path() {
        let file = fs::File::create(&path).map_err(|source| CallScopeError::Io {
            path: path.clone(),
            operation: "create",
            source,
        })?;
        let count = match cli.format {
            ExportFormat::Csv => export_csv(&filtered, file, &path)?,
            ExportFormat::Json => export_json(&filtered, file, &path)?,
        };
        tracing::info!(records = count, path = %path.display(), "Export written");
        writeln!(out, "\nExported {count} records to {}", path.display())
            .map_err(|source| CallScopeError::Render { source })?;
    }

    Ok(())
}
