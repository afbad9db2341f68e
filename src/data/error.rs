use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while reading the tweet dataset.
///
/// Load failures are fatal at startup; there is no retry.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Arrow: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

impl DataLoadError {
    pub(crate) fn invalid_row(row: usize, message: impl Into<String>) -> Self {
        DataLoadError::InvalidRow {
            row,
            message: message.into(),
        }
    }
}
