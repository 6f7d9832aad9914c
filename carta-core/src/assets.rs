//! Image asset lifecycle, decoupled from the relational write.
//!
//! An upload persists the bytes under a freshly minted, collision-resistant
//! name and resolves the durable public URL in one step; there is no
//! pending state. No delete or replace path exists: removing a product
//! leaves its asset behind (known gap, accepted).

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use crate::error::{CatalogError, Result};

#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Persist the bytes and return the durable public URL. On error the
    /// caller must not write any row referencing the asset.
    async fn upload(&self, bytes: &[u8], extension: &str) -> Result<String>;
}

/// Filesystem-backed asset store. Objects land under `root` and are served
/// back at `{public_base_url}/assets/{name}`.
#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalAssetStore {
    pub fn new(root: PathBuf, public_base_url: impl Into<String>) -> Self {
        Self {
            root,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Random token plus the original extension. Collisions are treated as
    /// acceptably improbable, not actively checked.
    fn mint_name(extension: &str) -> String {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        format!("{}.{}", Uuid::new_v4().simple(), ext)
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn upload(&self, bytes: &[u8], extension: &str) -> Result<String> {
        if bytes.is_empty() {
            return Err(CatalogError::AssetUpload("empty image payload".into()));
        }

        fs::create_dir_all(&self.root).await.map_err(|e| {
            CatalogError::AssetUpload(format!("cannot create asset directory: {e}"))
        })?;

        let name = Self::mint_name(extension);
        let path = self.root.join(&name);
        fs::write(&path, bytes).await.map_err(|e| {
            CatalogError::AssetUpload(format!("cannot persist asset bytes: {e}"))
        })?;

        let url = format!("{}/assets/{}", self.public_base_url, name);
        info!(asset = %name, size = bytes.len(), "stored image asset");
        Ok(url)
    }
}
