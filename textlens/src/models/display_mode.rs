// src/models/display_mode.rs
use clap::ValueEnum;
use serde::Deserialize;

/// How much detail to show beneath the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    None,
    Words,
    Characters,
    Sentences,
    All,
}

impl DisplayMode {
    #[inline]
    #[must_use]
    pub const fn shows_words(self) -> bool {
        matches!(self, Self::Words | Self::All)
    }

    #[inline]
    #[must_use]
    pub const fn shows_characters(self) -> bool {
        matches!(self, Self::Characters | Self::All)
    }

    #[inline]
    #[must_use]
    pub const fn shows_sentences(self) -> bool {
        matches!(self, Self::Sentences | Self::All)
    }
}
