use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The Markdown template could not be found.
    #[error("markdown template not found: {}", path.display())]
    MissingTemplate { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to standard output: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl ReportError {
    pub(crate) fn io(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}
