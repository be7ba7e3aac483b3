//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::{info, warn};

/// Ensure the media root exists so uploads can be written; create it when missing.
pub async fn ensure_env(media_root: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(media_root).await {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(anyhow::anyhow!("media root {media_root} exists but is not a directory"));
        }
        Err(_) => {
            warn!(%media_root, "media directory not found; creating it");
        }
    }
    tokio::fs::create_dir_all(media_root)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {media_root}: {e}"))?;
    info!(%media_root, "media directory ready");
    Ok(())
}
