//! Fetch-and-store for a single resolved path

use futures_util::StreamExt;
use mirror_manifest::ResolvedPath;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use crate::base_url::BaseUrl;
use crate::error::FetchError;
use crate::Result;

/// A file written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stored {
    pub url: String,
    pub path: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    base_url: BaseUrl,
    output_dir: PathBuf,
}

impl Fetcher {
    pub fn new(base_url: BaseUrl, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            output_dir: output_dir.into(),
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn url_for(&self, path: &ResolvedPath) -> String {
        self.base_url.join(path)
    }

    /// Map a resolved path under the output directory
    pub fn local_path(&self, path: &ResolvedPath) -> Result<PathBuf> {
        if !path.is_plain_relative() {
            return Err(FetchError::UnsafePath(path.to_string()));
        }

        Ok(path
            .segments()
            .fold(self.output_dir.clone(), |dir, segment| dir.join(segment)))
    }

    /// Retrieve `base_url + path` once and write the body to the matching
    /// local file, replacing any previous copy
    pub async fn fetch_and_store(&self, path: &ResolvedPath) -> Result<Stored> {
        let target = self.local_path(path)?;
        let url = self.url_for(path);

        tracing::debug!(url = %url, "Requesting file");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| FetchError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let partial = partial_path(&target);
        let bytes = match write_body(response, &partial).await {
            Ok(bytes) => bytes,
            Err(e) => {
                let _ = tokio::fs::remove_file(&partial).await;
                return Err(e);
            }
        };

        if let Err(source) = tokio::fs::rename(&partial, &target).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(FetchError::Write {
                path: target,
                source,
            });
        }

        tracing::info!(url = %url, path = %target.display(), bytes, "Stored file");

        Ok(Stored {
            url,
            path: target,
            bytes,
        })
    }
}

async fn write_body(response: reqwest::Response, partial: &Path) -> Result<u64> {
    let write_err = |source| FetchError::Write {
        path: partial.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::File::create(partial).await.map_err(write_err)?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await.map_err(write_err)?;
        written = written.saturating_add(chunk.len() as u64);
    }

    file.flush().await.map_err(write_err)?;
    Ok(written)
}

fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}
