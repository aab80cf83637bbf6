//! Downloads every file listed in the manifest into the working directory

use anyhow::Context;
use mirror_core::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    mirror_core::init_logging();

    let config = Config::default();
    config.validate()?;

    let summary = mirror_core::download_all(&config)
        .await
        .with_context(|| format!("Unable to mirror {}", config.manifest_path.display()))?;

    // Per-file failures are reported as they happen and never fail the run
    if !summary.is_clean() {
        tracing::warn!(
            failed = summary.failed,
            attempted = summary.attempted,
            "Some files could not be downloaded"
        );
    }

    Ok(())
}
