// src/view/text.rs
use crate::error::AnalysisError;
use crate::models::{DisplayMode, Report};
use crate::view::EMPTY_INPUT_PROMPT;

const NO_TOP_WORDS: &str = "No repeated words found.";

/// Renders an analysis outcome as plain text.
///
/// The summary and top-word table are always shown; `mode` selects which
/// detail sections follow them. Empty input renders only the prompt.
#[must_use]
pub fn render(text: &str, outcome: &Result<Report, AnalysisError>, mode: DisplayMode) -> String {
    let report = match outcome {
        Ok(report) => report,
        Err(AnalysisError::EmptyInput) => return EMPTY_INPUT_PROMPT.to_owned(),
    };

    let mut lines = Vec::new();
    push_summary(&mut lines, report);
    lines.push(String::new());
    push_top_words(&mut lines, report);

    if mode != DisplayMode::None {
        lines.push(String::new());
        push_heading(&mut lines, "Detailed view");
    }
    if mode.shows_words() {
        lines.push(String::new());
        lines.push(String::from("Words"));
        lines.extend(numbered(report.words()));
    }
    if mode.shows_characters() {
        lines.push(String::new());
        lines.push(String::from("Characters"));
        lines.push(text.to_owned());
    }
    if mode.shows_sentences() {
        lines.push(String::new());
        lines.push(String::from("Sentences"));
        lines.extend(numbered(report.sentences()));
    }

    lines.join("\n")
}

fn push_heading(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_owned());
    lines.push("-".repeat(title.chars().count()));
}

fn push_summary(lines: &mut Vec<String>, report: &Report) {
    push_heading(lines, "Summary");
    lines.push(format!("{:<14} {}", "Words:", report.word_count()));
    lines.push(format!("{:<14} {}", "Characters:", report.char_count()));
    lines.push(format!("{:<14} {}", "Sentences:", report.sentence_count()));
    lines.push(format!(
        "{:<14} {} min",
        "Reading time:",
        report.reading_time_minutes()
    ));
    lines.push(format!(
        "Average sentence length: {:.2} words",
        report.avg_sentence_length()
    ));
}

fn push_top_words(lines: &mut Vec<String>, report: &Report) {
    push_heading(lines, "Top repeated words");
    if report.top_words().is_empty() {
        lines.push(NO_TOP_WORDS.to_owned());
        return;
    }
    lines.push(format!("{:<20} {:<10}", "WORD", "COUNT"));
    for entry in report.top_words() {
        lines.push(format!("{:<20} {:<10}", entry.word, entry.count).trim_end().to_owned());
    }
}

fn numbered(items: &[String]) -> impl Iterator<Item = String> + '_ {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {item}", index.saturating_add(1)))
}
