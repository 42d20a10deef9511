use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning an uploaded file into a
/// [`MovieTable`](super::MovieTable).
///
/// Loading is all-or-nothing: any of these aborts the upload.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON is not tabular: {0}")]
    NotTabular(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}, column '{column}': {message}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        message: String,
    },

    #[error("row {row}, column '{column}': malformed list ({reason})")]
    MalformedList {
        row: usize,
        column: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;
