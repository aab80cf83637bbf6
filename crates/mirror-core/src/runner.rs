//! Traversal runner

use mirror_manifest::Manifest;
use crate::action::{DownloadFiles, PathAction, PrintUrls};
use crate::config::Config;
use crate::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Feed every resolved path of `manifest` to `action`, in walk order
///
/// Each path is handled to completion before the next one is produced. A
/// failed path is counted and skipped. Only a closed console ends the run
/// early, since nothing written after it could be seen.
pub async fn run<A: PathAction>(manifest: &Manifest, action: &mut A) -> RunSummary {
    let mut summary = RunSummary::default();

    for path in manifest.paths() {
        summary.attempted += 1;

        match action.apply(&path).await {
            Ok(()) => summary.succeeded += 1,
            Err(e) if e.is_console_closed() => {
                summary.failed += 1;
                tracing::debug!(path = %path, "Console closed, stopping");
                break;
            }
            Err(e) => {
                summary.failed += 1;
                tracing::warn!(path = %path, error = %e, "Skipping file");
            }
        }
    }

    summary
}

/// Print the remote URL of every manifest file to stdout
pub async fn print_urls(config: &Config) -> Result<RunSummary> {
    let base_url = config.base_url()?;
    let manifest = config.load_manifest()?;

    let mut action = PrintUrls::stdout(base_url);
    Ok(run(&manifest, &mut action).await)
}

/// Download every manifest file into the configured output directory
pub async fn download_all(config: &Config) -> Result<RunSummary> {
    let fetcher = config.fetcher()?;
    let manifest = config.load_manifest()?;

    tracing::info!(
        base_url = %fetcher.base_url(),
        output_dir = %fetcher.output_dir().display(),
        "Starting download"
    );

    let mut action = DownloadFiles::stdout(fetcher);
    let summary = run(&manifest, &mut action).await;

    tracing::info!(
        attempted = summary.attempted,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Download finished"
    );

    Ok(summary)
}
