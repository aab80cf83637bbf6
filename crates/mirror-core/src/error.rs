//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] mirror_manifest::ManifestError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] mirror_fetch::FetchError),

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// The console reader went away (closed pipe)
    pub fn is_console_closed(&self) -> bool {
        matches!(self, CoreError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
