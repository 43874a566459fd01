use std::sync::Arc;

use anyhow::anyhow;

use campus_crypto::{AdaptiveSaltedHash, FastUnsaltedHash, PasswordScheme};
use campus_db::Database;

use crate::storage::Storage;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub storage: Storage,
    pub public_url: String,
    /// Student and staff accounts.
    pub account_hasher: Box<dyn PasswordScheme>,
    /// ID-card viewing. Must stay compatible with digests already stored.
    pub card_hasher: Box<dyn PasswordScheme>,
}

impl AppStateInner {
    pub fn new(db: Database, storage: Storage, public_url: String) -> AppState {
        Arc::new(Self {
            db,
            storage,
            public_url,
            account_hasher: Box::new(AdaptiveSaltedHash::new()),
            card_hasher: Box::new(FastUnsaltedHash),
        })
    }

    /// Public URL of a file served from one of the upload mounts.
    pub fn public_file_url(&self, mount: &str, file_name: &str) -> String {
        format!("{}/{}/{}", self.public_url, mount, file_name)
    }
}

/// Run SQLite and password-hashing work off the async runtime.
pub async fn blocking<F, T>(f: F) -> anyhow::Result<T>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| anyhow!("spawn_blocking join error: {}", e))?
}

/// Row timestamps, e.g. `05 Mar 2025 14:02:11` (local time).
pub fn timestamp() -> String {
    chrono::Local::now().format("%d %b %Y %H:%M:%S").to_string()
}
