//! Error types for fetching and scraping

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ScrapeError {
    /// True for the 404 that marks the end of pagination
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScrapeError::Status { status: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
