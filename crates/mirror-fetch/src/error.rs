//! Fetch error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Refusing to store unsafe path: {0}")]
    UnsafePath(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// HTTP status code, when the server answered with a non-success status
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
