//! Manifest Mirror Core
//!
//! One traversal core shared by both entry points. The manifest walker
//! produces resolved paths and a [`PathAction`] consumes each one before the
//! next is produced: [`PrintUrls`] writes the remote URL, [`DownloadFiles`]
//! fetches and stores the file.

mod action;
mod config;
mod error;
mod runner;

pub use action::{DownloadFiles, PathAction, PrintUrls};
pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_MANIFEST_PATH};
pub use error::CoreError;
pub use runner::{download_all, print_urls, run, RunSummary};

// Re-export the building blocks
pub use mirror_fetch::{BaseUrl, FetchError, Fetcher, Stored};
pub use mirror_manifest::{Manifest, ManifestError, ManifestNode, ResolvedPath, Validation};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Log events go to stderr so stdout only carries the per-file console lines.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
