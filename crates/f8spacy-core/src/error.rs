//! Error types for f8spacy-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using f8spacy-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a conversion run can fail. All variants are fatal for the run.
#[derive(Error, Debug)]
pub enum Error {
    /// The archive could not be opened, or one of its entries is not a valid
    /// annotation document. `entry` is the archive path or the entry name.
    #[error("cannot read archive entry {entry}: {reason}")]
    ArchiveRead { entry: String, reason: String },

    /// The contributor report is unreadable as a whole.
    #[error("cannot parse report: {0}")]
    ReportParse(String),

    /// A human span has no constituent tokens or no label. `entry` is the
    /// archive entry holding the document.
    #[error("span {span_index} in {entry} {reason}")]
    InvalidSpan {
        entry: String,
        span_index: usize,
        reason: &'static str,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be serialised, or read back.
    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn archive(entry: impl Into<String>, reason: impl ToString) -> Self {
        Error::ArchiveRead {
            entry: entry.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this failure kind. `2` is left to clap usage
    /// errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::ArchiveRead { .. } => 3,
            Error::ReportParse(_) => 4,
            Error::InvalidSpan { .. } => 5,
            Error::Config(_) => 6,
            Error::Io { .. } | Error::Json { .. } => 7,
        }
    }
}
