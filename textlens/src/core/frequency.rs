// src/core/frequency.rs
use crate::models::WordFrequency;
use std::collections::HashMap;

/// Ranks the most frequent tokens.
///
/// # Arguments
///
/// * `words` - Tokens in the order they were found
/// * `limit` - Maximum number of entries to return
///
/// # Returns
///
/// Up to `limit` entries sorted by descending count. Tokens with equal counts
/// keep the order in which they were first seen.
#[must_use]
pub fn top_words(words: &[String], limit: usize) -> Vec<WordFrequency> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<WordFrequency> = Vec::new();

    for word in words {
        if let Some(&index) = positions.get(word.as_str()) {
            if let Some(entry) = ranked.get_mut(index) {
                entry.count = entry.count.saturating_add(1);
            }
        } else {
            positions.insert(word.as_str(), ranked.len());
            ranked.push(WordFrequency::new(word.as_str(), 1));
        }
    }

    // `sort_by` is stable, which preserves first-seen order among ties.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}
