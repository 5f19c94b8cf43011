// src/core/analyzer.rs
use tracing::debug;

use crate::core::frequency::top_words;
use crate::core::sentences::{split_sentences, trim_blank};
use crate::core::tokenize::tokenize;
use crate::error::AnalysisError;
use crate::models::{AnalyzerConfig, Report};

/// Analyzes a block of text with the default reading rate and top-word limit.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] when the text is empty or only
/// whitespace.
#[inline]
pub fn analyze(text: &str) -> Result<Report, AnalysisError> {
    analyze_with(text, &AnalyzerConfig::default())
}

/// Analyzes a block of text.
///
/// Words are counted on the lowercased text, characters on the raw input
/// (whitespace included) and sentences on the raw input split at runs of
/// `.`, `!` and `?`.
///
/// # Arguments
///
/// * `text` - The text to analyze, untrimmed
/// * `config` - Reading rate and the number of top words to keep
///
/// # Returns
///
/// * `Ok(Report)` - Statistics for the text
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] when the text is empty or only
/// whitespace.
pub fn analyze_with(text: &str, config: &AnalyzerConfig) -> Result<Report, AnalysisError> {
    if trim_blank(text).is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let words = tokenize(text);
    let sentences = split_sentences(text);
    let char_count = text.chars().count();

    let reading_time = reading_time_minutes(words.len(), config.words_per_minute);
    let avg_length = average_sentence_length(words.len(), sentences.len());
    let ranked = top_words(&words, config.top_words);

    debug!(
        words = words.len(),
        chars = char_count,
        sentences = sentences.len(),
        distinct_ranked = ranked.len(),
        "analyzed text"
    );

    Ok(Report::new(
        char_count,
        reading_time,
        avg_length,
        ranked,
        words,
        sentences,
    ))
}

/// Whole minutes needed to read `word_count` words, rounded up.
#[inline]
#[must_use]
pub const fn reading_time_minutes(word_count: usize, words_per_minute: usize) -> usize {
    if words_per_minute == 0 {
        return 0;
    }
    word_count.div_ceil(words_per_minute)
}

/// Words per sentence rounded to two decimals.
///
/// Rounds the exact binary value of the ratio through fixed-precision
/// formatting. Scaling by 100 first would round twice: 57 / 40 would give
/// 1.42 instead of 1.43.
#[inline]
#[must_use]
#[allow(clippy::as_conversions, reason = "Counts are far below 2^52")]
#[allow(clippy::cast_precision_loss, reason = "Counts are far below 2^52")]
pub fn average_sentence_length(word_count: usize, sentence_count: usize) -> f64 {
    if sentence_count == 0 {
        return 0.0;
    }
    let ratio = word_count as f64 / sentence_count as f64;
    format!("{ratio:.2}").parse().unwrap_or(ratio)
}
