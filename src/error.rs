//! Error types for the Fantasy Football Data CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FfError>;

#[derive(Error, Debug)]
pub enum FfError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
