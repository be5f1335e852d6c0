use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a [`LaunchDataset`](super::model::LaunchDataset).
///
/// Always fatal at startup: the dashboard has nothing to show without data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: {message}")]
    Malformed { row: usize, message: String },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

pub type LoadResult<T> = std::result::Result<T, DataLoadError>;
