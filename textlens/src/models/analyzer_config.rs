// src/models/analyzer_config.rs

/// Average adult silent reading speed.
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

pub const DEFAULT_TOP_WORDS: usize = 5;

/// Tunables for a single analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Never zero; checked when loaded from a config file or the command line.
    pub words_per_minute: usize,
    pub top_words: usize,
}

impl AnalyzerConfig {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

impl Default for AnalyzerConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
