// src/view/json.rs
use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::error::AnalysisError;
use crate::models::{DisplayMode, Report, WordFrequency};
use crate::view::EMPTY_INPUT_PROMPT;

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum JsonOutcome<'a> {
    Ok(JsonReport<'a>),
    Empty { message: &'a str },
}

#[derive(Serialize)]
struct JsonReport<'a> {
    word_count: usize,
    char_count: usize,
    sentence_count: usize,
    reading_time_minutes: usize,
    avg_sentence_length: f64,
    top_words: &'a [WordFrequency],
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentences: Option<&'a [String]>,
}

impl<'a> JsonReport<'a> {
    fn new(text: &'a str, report: &'a Report, mode: DisplayMode) -> Self {
        Self {
            word_count: report.word_count(),
            char_count: report.char_count(),
            sentence_count: report.sentence_count(),
            reading_time_minutes: report.reading_time_minutes(),
            avg_sentence_length: report.avg_sentence_length(),
            top_words: report.top_words(),
            words: mode.shows_words().then(|| report.words()),
            text: mode.shows_characters().then_some(text),
            sentences: mode.shows_sentences().then(|| report.sentences()),
        }
    }
}

/// Renders an analysis outcome as pretty-printed JSON.
///
/// Detail fields (`words`, `text`, `sentences`) are only present when `mode`
/// asks for them. Empty input becomes `{"status": "empty", "message": ...}`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(
    text: &str,
    outcome: &Result<Report, AnalysisError>,
    mode: DisplayMode,
) -> Result<String> {
    let json = match outcome {
        Ok(report) => JsonOutcome::Ok(JsonReport::new(text, report, mode)),
        Err(AnalysisError::EmptyInput) => JsonOutcome::Empty {
            message: EMPTY_INPUT_PROMPT,
        },
    };
    serde_json::to_string_pretty(&json).context("Failed to serialize report")
}
