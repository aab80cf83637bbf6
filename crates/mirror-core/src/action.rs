//! Per-path actions

use mirror_fetch::{BaseUrl, Fetcher};
use mirror_manifest::ResolvedPath;
use std::io::Write;

use crate::Result;

/// Work done for each resolved path
///
/// An `Err` marks the path as failed; the runner moves on to the next one.
#[allow(async_fn_in_trait)]
pub trait PathAction {
    async fn apply(&mut self, path: &ResolvedPath) -> Result<()>;
}

/// Writes the remote URL of every file, one per line
pub struct PrintUrls<W> {
    base_url: BaseUrl,
    out: W,
}

impl PrintUrls<std::io::Stdout> {
    pub fn stdout(base_url: BaseUrl) -> Self {
        Self::new(base_url, std::io::stdout())
    }
}

impl<W: Write> PrintUrls<W> {
    pub fn new(base_url: BaseUrl, out: W) -> Self {
        Self { base_url, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PathAction for PrintUrls<W> {
    async fn apply(&mut self, path: &ResolvedPath) -> Result<()> {
        writeln!(self.out, "{}", self.base_url.join(path))?;
        Ok(())
    }
}

/// Announces, fetches and stores every file
pub struct DownloadFiles<W> {
    fetcher: Fetcher,
    out: W,
}

impl DownloadFiles<std::io::Stdout> {
    pub fn stdout(fetcher: Fetcher) -> Self {
        Self::new(fetcher, std::io::stdout())
    }
}

impl<W: Write> DownloadFiles<W> {
    pub fn new(fetcher: Fetcher, out: W) -> Self {
        Self { fetcher, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Console lines are informational; losing them must not stop a download
    fn say(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::debug!(error = %e, "Console write failed");
        }
    }
}

impl<W: Write> PathAction for DownloadFiles<W> {
    async fn apply(&mut self, path: &ResolvedPath) -> Result<()> {
        let url = self.fetcher.url_for(path);
        self.say(format_args!("Downloading {}", url));

        if let Err(e) = self.fetcher.fetch_and_store(path).await {
            self.say(format_args!("Failed to download {}: {}", url, e));
            return Err(e.into());
        }

        Ok(())
    }
}
