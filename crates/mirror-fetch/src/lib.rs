//! Manifest Mirror: fetcher
//!
//! Retrieves one resolved path from the remote base URL and stores it at the
//! same relative path under a local output directory.

mod base_url;
mod error;
mod fetcher;

pub use base_url::BaseUrl;
pub use error::FetchError;
pub use fetcher::{Fetcher, Stored};

pub type Result<T> = std::result::Result<T, FetchError>;
