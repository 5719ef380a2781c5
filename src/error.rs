use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleDataError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Dataset source error: {message}")]
    Source { message: String },

    #[error("Input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Missing required column '{column}' in {}", path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SampleDataError>;
