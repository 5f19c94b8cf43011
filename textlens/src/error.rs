// src/error.rs
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Signals from the analyzer. Not a program failure: the caller shows a prompt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no text to analyze")]
    EmptyInput,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to read standard input")]
    Stdin(#[source] io::Error),

    #[error("standard input is not valid UTF-8 text")]
    StdinDecode(#[source] FromUtf8Error),
}

impl InputError {
    /// Process exit code, following the sysexits.h conventions.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Decode { .. } | Self::StdinDecode(_) => 65,
            Self::Io { .. } => 66,
            Self::Stdin(_) => 74,
        }
    }
}
