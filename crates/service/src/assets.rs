//! Asset store for uploaded plot images.
//!
//! Files are addressed by a key relative to the media root (`plots/<uuid>.<ext>`);
//! the HTTP layer exposes them under the configured media URL prefix.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::ServiceError;

const PLOT_DIR: &str = "plots";

/// An uploaded file as received from the client.
#[derive(Clone, Debug, Default)]
pub struct Upload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

impl Upload {
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    /// Extension for the stored file, taken from the sniffed content rather
    /// than the client filename. Anything but JPEG, PNG, GIF or WebP is
    /// refused, as is a declared part type that is not an image.
    pub fn image_extension(&self) -> Result<&'static str, ServiceError> {
        let declared = self
            .content_type
            .as_deref()
            .map(|ct| ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase());
        let declared_ok = match declared.as_deref() {
            None | Some("") | Some("application/octet-stream") => true,
            Some(ct) => ct.starts_with("image/"),
        };
        infer::get(&self.bytes)
            .filter(|kind| declared_ok && IMAGE_TYPES.contains(&kind.mime_type()))
            .map(|kind| kind.extension())
            .ok_or_else(|| ServiceError::Validation("image must be a JPEG, PNG, GIF or WebP file".into()))
    }
}

#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Persist the upload and return its storage key.
    async fn put(&self, upload: &Upload) -> Result<String, ServiceError>;
    /// Remove a stored asset; a key that no longer exists is not an error.
    async fn remove(&self, key: &str) -> Result<(), ServiceError>;
    /// Site-relative URL for a key, e.g. `/media/plots/ab12.jpg`.
    fn url(&self, key: &str) -> String;
}

/// Join an origin (`https://host:port`) and a site-relative URL.
pub fn absolute_url(origin: &str, relative: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), relative.trim_start_matches('/'))
}

/// Filesystem-backed store rooted at `media.root`.
#[derive(Clone, Debug)]
pub struct LocalAssetStore {
    root: PathBuf,
    url_prefix: String,
}

impl LocalAssetStore {
    pub fn new<P: Into<PathBuf>>(root: P, url_prefix: &str) -> Self {
        let trimmed = url_prefix.trim().trim_matches('/');
        let url_prefix = if trimmed.is_empty() { "/".to_string() } else { format!("/{trimmed}/") };
        Self { root: root.into(), url_prefix }
    }

    pub fn from_config(cfg: &configs::MediaConfig) -> Self {
        Self::new(&cfg.root, &cfg.url_prefix)
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, ServiceError> {
        let rel = Path::new(key);
        let safe = !key.is_empty() && rel.components().all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(ServiceError::Storage(format!("invalid asset key: {key}")));
        }
        Ok(self.root.join(rel))
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn put(&self, upload: &Upload) -> Result<String, ServiceError> {
        if upload.is_empty() {
            return Err(ServiceError::Validation("image must not be empty".into()));
        }
        let ext = upload.image_extension()?;
        let key = format!("{}/{}.{}", PLOT_DIR, Uuid::new_v4().simple(), ext);
        let path = self.path_for(&key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        }
        fs::write(&path, &upload.bytes).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        info!(%key, size = upload.bytes.len(), original = ?upload.filename, "asset_stored");
        Ok(key)
    }

    async fn remove(&self, key: &str) -> Result<(), ServiceError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(%key, "asset_removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ServiceError::Storage(e.to_string())),
        }
    }

    fn url(&self, key: &str) -> String {
        format!("{}{}", self.url_prefix, key.trim_start_matches('/'))
    }
}
