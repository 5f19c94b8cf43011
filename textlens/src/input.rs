// src/input.rs
use std::fs;
use std::io::{self, Read as _};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::InputError;

/// Where the text to analyze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Reads the text, decoding files and stdin as UTF-8.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file or standard input cannot be read
    /// * The bytes read are not valid UTF-8
    pub fn read(self) -> Result<String, InputError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::File(path) => read_text_file(&path),
            Self::Stdin => {
                let mut bytes = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut bytes)
                    .map_err(InputError::Stdin)?;
                String::from_utf8(bytes).map_err(InputError::StdinDecode)
            }
        }
    }
}

/// Reads an uploaded file and decodes it as UTF-8.
///
/// Files without a `.txt` extension are still read; a warning is logged.
///
/// # Errors
///
/// Returns [`InputError::Io`] if the file cannot be read and
/// [`InputError::Decode`] if its contents are not valid UTF-8.
pub fn read_text_file(path: &Path) -> Result<String, InputError> {
    let is_txt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if !is_txt {
        warn!(path = %path.display(), "expected a .txt file, analyzing anyway");
    }

    let bytes = fs::read(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input file");

    String::from_utf8(bytes).map_err(|source| InputError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
