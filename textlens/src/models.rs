// src/models.rs
pub mod analyzer_config;
pub mod display_mode;
pub mod report;

pub use analyzer_config::AnalyzerConfig;
pub use display_mode::DisplayMode;
pub use report::{Report, WordFrequency};
