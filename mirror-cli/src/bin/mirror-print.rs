//! Prints the remote URL of every file listed in the manifest

use anyhow::Context;
use mirror_core::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    mirror_core::init_logging();

    let config = Config::default();
    let summary = mirror_core::print_urls(&config)
        .await
        .with_context(|| format!("Unable to list {}", config.manifest_path.display()))?;

    tracing::debug!(files = summary.attempted, "Listed manifest");

    Ok(())
}
