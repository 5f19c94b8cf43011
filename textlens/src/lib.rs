// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod view;

pub use cli::{Args, execute, run};
pub use config::{ConfigFile, load_config, load_config_from};
pub use crate::core::{analyze, analyze_with};
pub use error::{AnalysisError, InputError};
pub use input::{InputSource, read_text_file};
pub use models::{AnalyzerConfig, DisplayMode, Report, WordFrequency};
pub use view::{EMPTY_INPUT_PROMPT, OutputFormat, on_input_change, render, render_json};
