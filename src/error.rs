//! Error types for the Little League stats tracker

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("OCR failed for {}: {message}", path.display())]
    Ocr { path: PathBuf, message: String },

    #[error("Not a supported image or text file: {}", path.display())]
    UnsupportedImage { path: PathBuf },

    #[error("Could not determine a data directory; set {env_var} or pass --db")]
    MissingDataDir { env_var: String },

    #[error("Limit must be a positive integer")]
    InvalidLimit,

    #[error("No games have been recorded yet")]
    NoData,
}
