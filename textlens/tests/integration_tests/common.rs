// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use textlens::{Args, OutputFormat};
use textlens::logging::LoggingOpts;

pub fn create_test_file(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

pub fn create_config_file(dir: &Path, lines: &[&str]) -> Result<PathBuf> {
    create_test_file(dir, ".textlens.toml", lines.join("\n"))
}

/// Args for analyzing `text` with an explicit, empty config file in `dir`, so
/// a `.textlens.toml` in any parent of the working directory is never read.
pub fn text_args(text: &str, dir: &Path) -> Result<Args> {
    let config = create_test_file(dir, "empty.textlens.toml", "")?;
    Ok(Args {
        text: Some(text.to_owned()),
        file: None,
        show: None,
        format: OutputFormat::Text,
        top: None,
        wpm: None,
        config: Some(config),
        logging: LoggingOpts::default(),
    })
}
