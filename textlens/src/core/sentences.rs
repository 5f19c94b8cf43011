// src/core/sentences.rs
use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("terminator pattern is a valid regex"));

/// Unicode whitespace plus the information separators U+001C to U+001F,
/// which also separate text and are stripped alongside spaces.
#[inline]
#[must_use]
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Strips leading and trailing [`is_blank`] characters.
#[inline]
#[must_use]
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank)
}

/// Splits text into trimmed, non-empty sentences.
///
/// Any run of `.`, `!` or `?` ends a sentence. Abbreviations, decimal numbers
/// and quoted punctuation are not special-cased: `"Mr. Smith"` becomes the two
/// sentences `"Mr"` and `"Smith"`, and `"3.14"` becomes `"3"` and `"14"`.
/// Callers rely on these counts, so keep the heuristic as it is.
#[inline]
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_TERMINATORS
        .split(text)
        .map(trim_blank)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_owned)
        .collect()
}
