//! Error types for the energy plotter.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for plotter operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors raised while loading, rendering or displaying an energy table.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The energy table does not exist or cannot be opened.
    #[error("cannot open energy table {}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data row has the wrong shape or non-numeric content.
    #[error("malformed energy table {} at line {line}: {reason}", path.display())]
    MalformedData {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// Header present but no data rows follow it.
    #[error("energy table {} contains no data rows", path.display())]
    EmptyTable { path: PathBuf },

    /// No graphical output could be opened.
    #[error("display unavailable: {0}")]
    DisplayUnavailable(String),

    /// Writing an output file failed.
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Chart descriptions could not be serialized.
    #[error("failed to serialize charts: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PlotError {
    pub fn missing_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MissingFile {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

impl From<eframe::Error> for PlotError {
    fn from(err: eframe::Error) -> Self {
        Self::DisplayUnavailable(err.to_string())
    }
}
