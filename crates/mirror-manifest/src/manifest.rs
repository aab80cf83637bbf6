//! Loaded manifest document

use serde_json::Value;
use std::path::Path;

use crate::error::ManifestError;
use crate::node::{ManifestNode, Validation};
use crate::walk::{walk, Prefix, Walk};
use crate::Result;

/// A manifest tree, loaded once and read-only afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    root: ManifestNode,
}

impl Manifest {
    pub fn new(root: ManifestNode) -> Self {
        Self { root }
    }

    /// Read and validate a manifest file
    pub fn load<P: AsRef<Path>>(path: P, validation: Validation) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest = Self::from_json_str(&contents, validation)?;

        tracing::debug!(
            path = %path.display(),
            files = manifest.root.file_count(),
            "Loaded manifest"
        );

        Ok(manifest)
    }

    pub fn from_json_str(json: &str, validation: Validation) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value, validation)
    }

    pub fn from_value(value: &Value, validation: Validation) -> Result<Self> {
        Ok(Self::new(ManifestNode::from_value(value, validation)?))
    }

    /// Walk every file in the manifest, starting from an empty prefix
    pub fn paths(&self) -> Walk<'_> {
        walk(&self.root, Prefix::root())
    }
}
