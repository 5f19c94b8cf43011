// src/logging.rs
use clap::{ArgGroup, Parser};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug, Clone, Default)]
#[command(group = ArgGroup::new("logging"))]
pub struct LoggingOpts {
    /// Show debug logging; repeat for trace
    #[arg(short, long, action = clap::ArgAction::Count, global(true), group = "logging")]
    pub debug: u8,

    /// Only show warnings and errors
    #[arg(short, long, global(true), group = "logging")]
    pub warn: bool,

    /// Only show errors
    #[arg(short, long, global(true), group = "logging")]
    pub error: bool,
}

impl LoggingOpts {
    #[must_use]
    pub const fn to_level_filter(&self) -> LevelFilter {
        if self.error {
            LevelFilter::ERROR
        } else if self.warn {
            LevelFilter::WARN
        } else {
            match self.debug {
                0 => LevelFilter::INFO,
                1 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        }
    }

    /// Installs a compact stderr subscriber. Stdout is left for the report.
    ///
    /// Does nothing if a global subscriber is already set, so tests can call
    /// [`crate::run`] repeatedly.
    pub fn configure_logging(&self) {
        let subscriber = tracing_subscriber::fmt()
            .compact()
            .with_target(false)
            .without_time()
            .with_max_level(self.to_level_filter())
            .with_writer(std::io::stderr)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::trace!("global subscriber already set");
        }
    }
}
