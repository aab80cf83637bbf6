//! Manifest Mirror: manifest model
//!
//! A manifest is a nested JSON tree. Objects are directories: their reserved
//! `files` key lists the filenames at that level and every other key is a
//! subdirectory. Arrays group nodes at the same directory level.
//!
//! The walker flattens the tree into `/`-joined relative paths, depth-first,
//! in document order.

mod error;
mod manifest;
mod node;
mod path;
mod walk;

pub use error::ManifestError;
pub use manifest::Manifest;
pub use node::{ManifestNode, Validation, FILES_KEY};
pub use path::ResolvedPath;
pub use walk::{walk, Prefix, Walk};

pub type Result<T> = std::result::Result<T, ManifestError>;
