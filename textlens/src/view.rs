// src/view.rs
pub mod json;
pub mod text;

pub use json::render_json;
pub use text::render;

use anyhow::Result;
use clap::ValueEnum;

use crate::core::analyze;
use crate::error::AnalysisError;
use crate::models::{DisplayMode, Report};

pub const EMPTY_INPUT_PROMPT: &str = "Please enter text or upload a file to analyze.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders an analysis outcome in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[inline]
pub fn present(
    text: &str,
    outcome: &Result<Report, AnalysisError>,
    mode: DisplayMode,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render(text, outcome, mode)),
        OutputFormat::Json => render_json(text, outcome, mode),
    }
}

/// Input-changed handler: analyzes the current text and renders it as plain text.
#[inline]
#[must_use]
pub fn on_input_change(text: &str, mode: DisplayMode) -> String {
    render(text, &analyze(text), mode)
}
