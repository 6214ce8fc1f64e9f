//! Error types for the markview library.

use std::io;
use thiserror::Error;

/// Result type alias for markview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering or exporting content.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The export input was empty or whitespace-only.
    #[error("No content to export")]
    EmptyContent,

    /// Error while building or serializing the PDF document.
    #[error("PDF export error: {0}")]
    Export(String),

    /// Error in the underlying key-value store.
    #[error("Store error: {0}")]
    Store(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Store(err.to_string())
    }
}
