//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Ensure the media root exists before the asset store writes into it.
pub async fn ensure_env(media_root: &str) -> anyhow::Result<()> {
    common::env::ensure_env(media_root).await
}
