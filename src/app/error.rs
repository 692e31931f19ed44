use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookrakeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A page fetch exhausted its retry budget. Aborts the whole run.
    #[error("failed to fetch {url} after {attempts} attempts")]
    FatalFetch { url: String, attempts: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("Record store error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Publish failed: {0}")]
    Publish(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BookrakeError>;
