// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::config::{Config, load_config, read_config};
use crate::core::driver::{Mode, Settings, run_inputs};
use crate::models::Summary;

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "fcount",
    author,
    version,
    about = "Print field (column) count and number of lines for each count",
    long_about = None
)]
pub struct Args {
    /// Input files; none or `-` reads standard input
    pub files: Vec<String>,

    /// Delimiter for the input files (default: tab). With --csv it must be a single byte
    #[arg(short, long, value_parser = clap::value_parser!(OsString))]
    pub delimiter: Option<OsString>,

    /// Parse input as CSV, honouring quoted fields
    #[arg(short = 'C', long)]
    pub csv: bool,

    /// Quote character used in CSV mode (default: ")
    #[arg(short = 'Q', long = "csv-quote", value_parser = clap::value_parser!(OsString))]
    pub csv_quote: Option<OsString>,

    /// Print a header line before the counts
    #[arg(short = 'H', long)]
    pub header: bool,

    /// Only report the number of records in each file
    #[arg(short = 'l', long = "line-count")]
    pub line_count: bool,

    /// Do not print counts; exit with 2 if any file is inconsistent
    #[arg(short, long)]
    pub quiet: bool,

    /// Read defaults from this file instead of searching for .fcount.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

const DEFAULT_DELIMITER: &[u8] = b"\t";
const DEFAULT_CSV_DELIMITER: u8 = b',';
const DEFAULT_QUOTE: u8 = b'"';

/// Combines command-line flags with configuration defaults and validates them.
///
/// # Errors
///
/// This function may return an error if:
/// * The delimiter is empty
/// * The quote is not exactly one byte
/// * CSV mode is on and the delimiter is not exactly one byte
pub fn resolve_settings(args: &Args, config: &Config) -> Result<Settings> {
    let csv = args.csv || config.csv.unwrap_or(false);
    // Flags are taken as raw bytes, so a delimiter need not be valid UTF-8.
    let delimiter = args
        .delimiter
        .as_deref()
        .map(|value| value.as_encoded_bytes())
        .or_else(|| config.delimiter.as_deref().map(str::as_bytes));
    let quote = args
        .csv_quote
        .as_deref()
        .map(|value| value.as_encoded_bytes())
        .or_else(|| config.quote.as_deref().map(str::as_bytes));
    let quote = match quote {
        Some(quote) => single_byte(quote, "quote")?,
        None => DEFAULT_QUOTE,
    };

    let mode = if csv {
        let delimiter = match delimiter {
            Some(delimiter) => single_byte(delimiter, "CSV delimiter")?,
            None => DEFAULT_CSV_DELIMITER,
        };
        Mode::Csv { delimiter, quote }
    } else {
        let delimiter = delimiter.unwrap_or(DEFAULT_DELIMITER);
        if delimiter.is_empty() {
            bail!("delimiter must not be empty");
        }
        Mode::Plain {
            delimiter: delimiter.to_vec(),
        }
    };

    let settings = Settings {
        mode,
        header: args.header || config.header.unwrap_or(false),
        line_count: args.line_count,
        quiet: args.quiet,
    };
    debug!(?settings, "resolved settings");
    Ok(settings)
}

fn single_byte(value: &[u8], what: &str) -> Result<u8> {
    match value {
        [byte] => Ok(*byte),
        _ => bail!(
            "{what} must be exactly one byte, got {:?}",
            String::from_utf8_lossy(value)
        ),
    }
}

/// Runs one invocation against the given writer.
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration file cannot be read or parsed
/// * The flags are invalid
/// * Any input cannot be opened, read or tokenized
pub fn run_with_writer<W: Write>(args: &Args, out: &mut W) -> Result<Summary> {
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            load_config(&cwd)?
        }
    };
    run_with_config(args, &config, out)
}

/// Runs one invocation with an already loaded configuration.
///
/// # Errors
///
/// This function may return an error if:
/// * The flags are invalid
/// * Any input cannot be opened, read or tokenized
pub fn run_with_config<W: Write>(args: &Args, config: &Config, out: &mut W) -> Result<Summary> {
    let settings = resolve_settings(args, config)?;
    run_inputs(&settings, &args.files, out)
}

/// Runs one invocation, printing reports to standard output.
///
/// # Errors
///
/// Propagates every failure from [`run_with_writer`].
pub fn run(args: Args) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_with_writer(&args, &mut out)?;
    Ok(summary.exit_code(args.quiet))
}
