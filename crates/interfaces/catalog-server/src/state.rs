use std::sync::Arc;

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use catalog_persistence::{DbState, ProductStore, RedbProductStore, StorageError};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;

/// Shared by every handler: the store handle and the root it serves.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ProductStore>,
    root: Arc<Utf8PathBuf>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            store,
            root: Arc::new(root.into()),
        }
    }

    /// Opens the redb store under the configured data dir, refusing to serve
    /// a database written by a newer release.
    pub fn open(config: &Config) -> anyhow::Result<Self> {
        let store = RedbProductStore::new();
        let root = config.data_dir.clone();
        match store.validate(&root)? {
            DbState::Missing => info!("No catalog at {root}, it will be created on first write"),
            DbState::Valid => info!("Serving catalog at {root}"),
            DbState::Corrupt => warn!("Catalog at {root} was corrupt and has been quarantined"),
            DbState::Busy => bail!("catalog at {root} is open in another process"),
            DbState::NewerSchema { found, supported } => {
                bail!("catalog at {root} has schema {found}, this build supports {supported}")
            }
        }
        Ok(Self::new(Arc::new(store), root))
    }

    /// Runs one store operation on the blocking pool.
    pub async fn with_store<T, F>(&self, op: F) -> Result<T, AppError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn ProductStore, &Utf8Path) -> Result<T, StorageError> + Send + 'static,
    {
        let store = self.store.clone();
        let root = self.root.clone();
        let out = tokio::task::spawn_blocking(move || op(store.as_ref(), &root)).await??;
        Ok(out)
    }
}
