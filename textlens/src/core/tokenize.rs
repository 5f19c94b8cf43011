// src/core/tokenize.rs
use regex::Regex;
use std::sync::LazyLock;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is a valid regex"));

/// Splits text into lowercase word tokens.
///
/// A token is a maximal run of letters, numbers (any `\p{N}`, so `²` and `½`
/// count) and underscores. Combining marks and connector punctuation other
/// than `_` end a token: `"cafe\u{301}"` yields `cafe` and `"a‿b"` yields
/// `a` and `b`. Punctuation and symbols never appear in a token, so an input
/// such as `"--- !!"` yields no tokens at all. Case folding happens before
/// matching, which keeps `"Hello"` and `"HELLO"` the same token.
#[inline]
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_owned())
        .collect()
}
