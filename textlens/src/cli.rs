// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{load_config, load_config_from};
use crate::core::analyze_with;
use crate::input::InputSource;
use crate::logging::LoggingOpts;
use crate::models::DisplayMode;
use crate::view::{OutputFormat, present};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text to analyze (reads standard input when neither --text nor --file is given)
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// UTF-8 text file to analyze (e.g., "essay.txt")
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Details to show below the summary
    #[arg(short, long, value_enum)]
    pub show: Option<DisplayMode>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Number of most frequent words to list
    #[arg(short = 't', long)]
    pub top: Option<usize>,

    /// Reading speed used for the reading time estimate
    #[arg(long)]
    pub wpm: Option<usize>,

    /// Config file to use instead of searching for .textlens.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingOpts,
}

/// Analyzes the input described by `args` and returns the rendered output.
///
/// Settings are resolved as command line flag, then config file, then default.
/// Empty input is not an error: the output is the prompt asking for text.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed, or sets `words_per_minute` to zero
/// * The input file or standard input cannot be read or is not valid UTF-8
/// * JSON serialization fails
pub fn execute(args: Args) -> Result<String> {
    let file_config = match &args.config {
        Some(path) => load_config_from(path)?,
        None => {
            let cwd = env::current_dir().context("Failed to resolve current directory")?;
            load_config(&cwd)?
        }
    };
    let config = file_config.with_overrides(args.wpm, args.top, args.show);
    let analyzer = config.analyzer_config()?;
    let mode = config.display_mode();

    let source = match (args.text, args.file) {
        (Some(text), _) => InputSource::Text(text),
        (None, Some(path)) => InputSource::File(path),
        (None, None) => InputSource::Stdin,
    };
    let text = source.read()?;

    let outcome = analyze_with(&text, &analyzer);
    if let Err(err) = &outcome {
        debug!("{err}");
    }
    present(&text, &outcome, mode, args.format)
}

/// Runs the command line program, printing the report to stdout.
///
/// # Errors
///
/// See [`execute`].
#[inline]
pub fn run(args: Args) -> Result<()> {
    args.logging.configure_logging();
    let output = execute(args)?;
    println!("{output}");
    Ok(())
}
