// src/models/report.rs
use serde::Serialize;

/// A distinct token and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

impl WordFrequency {
    #[inline]
    #[must_use]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Statistics for one block of text.
///
/// Built by [`crate::analyze`] and never mutated afterwards; the fields are
/// private so `word_count` always matches `words` and `sentence_count`
/// always matches `sentences`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    word_count: usize,
    char_count: usize,
    sentence_count: usize,
    reading_time_minutes: usize,
    avg_sentence_length: f64,
    top_words: Vec<WordFrequency>,
    words: Vec<String>,
    sentences: Vec<String>,
}

impl Report {
    #[must_use]
    pub(crate) fn new(
        char_count: usize,
        reading_time_minutes: usize,
        avg_sentence_length: f64,
        top_words: Vec<WordFrequency>,
        words: Vec<String>,
        sentences: Vec<String>,
    ) -> Self {
        Self {
            word_count: words.len(),
            char_count,
            sentence_count: sentences.len(),
            reading_time_minutes,
            avg_sentence_length,
            top_words,
            words,
            sentences,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Raw length of the input in characters, whitespace included.
    #[inline]
    #[must_use]
    pub const fn char_count(&self) -> usize {
        self.char_count
    }

    #[inline]
    #[must_use]
    pub const fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    #[inline]
    #[must_use]
    pub const fn reading_time_minutes(&self) -> usize {
        self.reading_time_minutes
    }

    /// Words per sentence, rounded to two decimals. Zero when there are no sentences.
    #[inline]
    #[must_use]
    pub const fn avg_sentence_length(&self) -> f64 {
        self.avg_sentence_length
    }

    #[inline]
    #[must_use]
    pub fn top_words(&self) -> &[WordFrequency] {
        &self.top_words
    }

    /// Lowercased tokens in the order they appear.
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }
}
