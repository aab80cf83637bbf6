//! Mirror configuration

use mirror_fetch::{BaseUrl, Fetcher};
use mirror_manifest::{Manifest, Validation};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::CoreError;
use crate::Result;

/// CDN prefix every resolved path is appended to
pub const DEFAULT_BASE_URL: &str =
    "https://cdn.jsdelivr.net/gh/iainfox/FBLA-Intro-To-Programming@latest/";

/// Manifest location, relative to the working directory
pub const DEFAULT_MANIFEST_PATH: &str = "./src/scripts/file_paths.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Remote prefix for every file
    pub base_url: String,
    /// Path to the JSON manifest
    pub manifest_path: PathBuf,
    /// Directory downloaded files are mirrored into
    pub output_dir: PathBuf,
    /// Treatment of malformed manifest nodes
    #[serde(default)]
    pub validation: Validation,
}

impl Config {
    pub fn new(base_url: impl Into<String>, manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            manifest_path: manifest_path.into(),
            output_dir: PathBuf::from("."),
            validation: Validation::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_manifest_path(mut self, manifest_path: impl Into<PathBuf>) -> Self {
        self.manifest_path = manifest_path.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Parsed and normalized base URL
    pub fn base_url(&self) -> Result<BaseUrl> {
        BaseUrl::parse(&self.base_url).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Check everything that can be checked before touching the network
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;
        Ok(())
    }

    pub fn load_manifest(&self) -> Result<Manifest> {
        Ok(Manifest::load(&self.manifest_path, self.validation)?)
    }

    pub fn fetcher(&self) -> Result<Fetcher> {
        Ok(Fetcher::new(self.base_url()?, self.output_dir.clone()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MANIFEST_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.manifest_path, PathBuf::from(DEFAULT_MANIFEST_PATH));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.validation, Validation::Permissive);
        assert_eq!(config.base_url().unwrap().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_base_url() {
        let config = Config::default().with_base_url("cdn.example.com/files");
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
        assert!(config.fetcher().is_err());
    }

    #[test]
    fn test_validation_defaults_when_absent() {
        let config: Config = serde_json::from_str(
            r#"{"base_url": "http://localhost/", "manifest_path": "m.json", "output_dir": "out"}"#,
        )
        .unwrap();
        assert_eq!(config.validation, Validation::Permissive);

        let strict: Config = serde_json::from_str(
            r#"{"base_url": "http://localhost/", "manifest_path": "m.json", "output_dir": "out", "validation": "strict"}"#,
        )
        .unwrap();
        assert_eq!(strict.validation, Validation::Strict);
    }

    #[test]
    fn test_load_manifest_uses_validation() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("file_paths.json");
        std::fs::write(&manifest_path, r#"{"files": ["a.txt", 1]}"#).unwrap();

        let lenient = Config::default().with_manifest_path(&manifest_path);
        assert_eq!(lenient.load_manifest().unwrap().paths().count(), 1);

        let strict = lenient.with_validation(Validation::Strict);
        assert!(matches!(
            strict.load_manifest(),
            Err(CoreError::Manifest(_))
        ));
    }
}
