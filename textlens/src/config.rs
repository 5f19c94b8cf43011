// src/config.rs
pub mod loader;

pub use loader::{CONFIG_FILE_NAME, find_config_file, load_config, load_config_from};

use anyhow::{Result, bail};
use serde::Deserialize;

use crate::models::{AnalyzerConfig, DisplayMode};

/// Contents of a `.textlens.toml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub words_per_minute: Option<usize>,
    pub top_words: Option<usize>,
    pub display: Option<DisplayMode>,
}

impl ConfigFile {
    /// Overlays values from the command line onto this file's values.
    #[must_use]
    pub fn with_overrides(
        self,
        words_per_minute: Option<usize>,
        top_words: Option<usize>,
        display: Option<DisplayMode>,
    ) -> Self {
        Self {
            words_per_minute: words_per_minute.or(self.words_per_minute),
            top_words: top_words.or(self.top_words),
            display: display.or(self.display),
        }
    }

    /// Resolves the analyzer settings, filling gaps with the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `words_per_minute` is zero.
    pub fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let defaults = AnalyzerConfig::default();
        let words_per_minute = self.words_per_minute.unwrap_or(defaults.words_per_minute);
        if words_per_minute == 0 {
            bail!("words_per_minute must be greater than zero");
        }
        Ok(AnalyzerConfig {
            words_per_minute,
            top_words: self.top_words.unwrap_or(defaults.top_words),
        })
    }

    #[inline]
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display.unwrap_or_default()
    }
}
