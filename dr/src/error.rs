//! Error types for dailyread

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a daily update
///
/// Every variant is fatal: the run stops before the state file is written,
/// so rerunning starts from the same pointer.
#[derive(Debug, Error)]
pub enum DailyReadError {
    #[error("surah metadata has no entry for surah {0}")]
    MissingSection(u32),

    #[error("daily verse count must be at least 1, got {0}")]
    InvalidCount(u32),

    #[error("invalid surah metadata: {0}")]
    InvalidTable(String),

    #[error("invalid {what} at {path}: {message}")]
    Config {
        what: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Markers not found: {start} / {end}")]
    MarkersNotFound { start: String, end: String },

    #[error("Expected exactly 1 replacement for {marker}, got {count}")]
    ReplacementCount { marker: String, count: usize },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DailyReadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DailyReadError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config(what: &'static str, path: impl Into<PathBuf>, message: impl ToString) -> Self {
        DailyReadError::Config {
            what,
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Configuration problems: bad metadata, bad state, bad settings
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            DailyReadError::MissingSection(_)
                | DailyReadError::InvalidCount(_)
                | DailyReadError::InvalidTable(_)
                | DailyReadError::Config { .. }
        )
    }

    /// Failures talking to the ayah-of-the-day endpoint
    pub fn is_fetch(&self) -> bool {
        matches!(self, DailyReadError::Http(_) | DailyReadError::HttpStatus { .. })
    }

    /// Marker problems in the target document
    pub fn is_template(&self) -> bool {
        matches!(
            self,
            DailyReadError::MarkersNotFound { .. } | DailyReadError::ReplacementCount { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DailyReadError>;
