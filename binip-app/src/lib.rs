//! Application bootstrap for binip.
//!
//! Provides the `BucketStore` adapters and `Store`, which opens a backend,
//! lays out the fixed partitions and offers the maintenance operations used
//! by the `info` and `reset` commands.

pub mod adapters;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use binip_core::error::{StoreError, StoreResult};
use binip_core::traits::{
    BucketDump, BucketStore, APP_NAME_KEY, NETWORK_PREFIX_KEY, RECORDS_BUCKET, SYSTEM_BUCKET,
    VERSION_KEY,
};

use adapters::MemoryBucketStore;

/// Store format version written at initialization
pub const STORE_VERSION: &str = "0.1.0";

/// Application name written at initialization
pub const APP_NAME: &str = "binip";

/// Bootstrapped persistence backend.
///
/// Every frontend constructs this once at startup and hands
/// [`Store::handle`] to the state machine.
pub struct Store {
    backend: Arc<dyn BucketStore>,
    location: Option<PathBuf>,
}

impl Store {
    /// Open the JSON store at `path` and initialize it.
    ///
    /// # Errors
    /// Fails if the file cannot be read or written, or is corrupt.
    #[cfg(feature = "json-store")]
    pub async fn open(path: &Path) -> StoreResult<Self> {
        let backend = adapters::JsonBucketStore::open(path).await?;
        Self::with_backend(Arc::new(backend), Some(path.to_path_buf())).await
    }

    /// Initialized store that lives only in memory
    pub async fn in_memory() -> StoreResult<Self> {
        Self::with_backend(Arc::new(MemoryBucketStore::new()), None).await
    }

    /// Initialize an arbitrary backend: create both partitions and write
    /// `version` / `app_name` when they are absent.
    pub async fn with_backend(
        backend: Arc<dyn BucketStore>,
        location: Option<PathBuf>,
    ) -> StoreResult<Self> {
        backend.ensure_bucket(RECORDS_BUCKET).await?;
        backend.ensure_bucket(SYSTEM_BUCKET).await?;

        for (key, value) in [(VERSION_KEY, STORE_VERSION), (APP_NAME_KEY, APP_NAME)] {
            if backend.get(SYSTEM_BUCKET, key).await.is_none() {
                backend.put(SYSTEM_BUCKET, key, value.as_bytes()).await?;
            }
        }

        match &location {
            Some(path) => log::info!("store initialized at {}", path.display()),
            None => log::info!("in-memory store initialized"),
        }

        Ok(Self { backend, location })
    }

    /// Shared handle for the state machine
    pub fn handle(&self) -> Arc<dyn BucketStore> {
        Arc::clone(&self.backend)
    }

    /// Backing file, `None` for in-memory stores
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Prefix saved by onboarding, if any
    pub async fn network_prefix(&self) -> Option<String> {
        self.backend
            .get(SYSTEM_BUCKET, NETWORK_PREFIX_KEY)
            .await
            .map(|v| String::from_utf8_lossy(&v).into_owned())
    }

    /// Drop every record and leave an empty records partition behind.
    ///
    /// The system partition, including the saved prefix, is kept.
    pub async fn reset(&self) -> StoreResult<()> {
        match self.backend.delete_bucket(RECORDS_BUCKET).await {
            Ok(()) => {}
            Err(e @ StoreError::BucketNotFound(_)) => log::warn!("reset: {e}"),
            Err(e) => return Err(e),
        }
        self.backend.ensure_bucket(RECORDS_BUCKET).await?;
        log::info!("records partition reset");
        Ok(())
    }

    /// Every bucket with its entries
    pub async fn dump(&self) -> BucketDump {
        self.backend.dump_all().await
    }

    /// Text rendering of [`Store::dump`]
    pub async fn render_dump(&self) -> String {
        render_dump(&self.dump().await)
    }
}

/// Format a dump as one table per bucket:
///
/// ```text
/// bucket: system
///   key      | value
///   app_name | binip
/// ```
pub fn render_dump(dump: &BucketDump) -> String {
    let mut out = String::new();

    for (bucket, entries) in dump {
        let rows: Vec<(String, String)> = entries
            .iter()
            .map(|(k, v)| {
                (
                    String::from_utf8_lossy(k).into_owned(),
                    String::from_utf8_lossy(v).into_owned(),
                )
            })
            .collect();
        let width = rows
            .iter()
            .map(|(k, _)| k.chars().count())
            .chain(std::iter::once("key".len()))
            .max()
            .unwrap_or_default();

        let _ = writeln!(out, "bucket: {bucket}");
        let _ = writeln!(out, "  {:<width$} | value", "key");
        if rows.is_empty() {
            let _ = writeln!(out, "  (empty)");
        }
        for (key, value) in &rows {
            let _ = writeln!(out, "  {key:<width$} | {value}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bootstrap_writes_system_keys() {
        let store = Store::in_memory().await.unwrap();
        let dump = store.dump().await;

        assert!(dump[RECORDS_BUCKET].is_empty());
        assert_eq!(
            dump[SYSTEM_BUCKET],
            vec![
                (APP_NAME_KEY.to_vec(), APP_NAME.as_bytes().to_vec()),
                (VERSION_KEY.to_vec(), STORE_VERSION.as_bytes().to_vec()),
            ]
        );
        assert_eq!(store.network_prefix().await, None);
        assert_eq!(store.location(), None);
    }

    #[tokio::test]
    async fn bootstrap_keeps_existing_version() {
        let backend = Arc::new(MemoryBucketStore::new());
        backend.put(SYSTEM_BUCKET, VERSION_KEY, b"0.0.9").await.unwrap();

        let store = Store::with_backend(backend, None).await.unwrap();
        let handle = store.handle();
        assert_eq!(
            handle.get(SYSTEM_BUCKET, VERSION_KEY).await,
            Some(b"0.0.9".to_vec())
        );
    }

    #[tokio::test]
    async fn reset_clears_records_only() {
        let store = Store::in_memory().await.unwrap();
        let handle = store.handle();
        handle.put(RECORDS_BUCKET, b"r-1", b"{}").await.unwrap();
        handle
            .put(SYSTEM_BUCKET, NETWORK_PREFIX_KEY, b"10.0.0.0/8")
            .await
            .unwrap();

        store.reset().await.unwrap();

        let dump = store.dump().await;
        assert!(dump[RECORDS_BUCKET].is_empty());
        assert_eq!(store.network_prefix().await.as_deref(), Some("10.0.0.0/8"));
    }

    #[test]
    fn render_aligns_keys() {
        let mut dump = BucketDump::new();
        dump.insert(
            "system".into(),
            vec![
                (b"app_name".to_vec(), b"binip".to_vec()),
                (b"version".to_vec(), b"0.1.0".to_vec()),
            ],
        );
        dump.insert("records".into(), Vec::new());

        let text = render_dump(&dump);
        assert_eq!(
            text,
            "bucket: records\n  key | value\n  (empty)\n\
             bucket: system\n  key      | value\n  app_name | binip\n  version  | 0.1.0\n"
        );
    }
}
