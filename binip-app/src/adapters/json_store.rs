//! Single-file JSON bucket store.
//!
//! All buckets live in one pretty-printed document:
//!
//! ```json
//! { "buckets": { "system": { "<base64 key>": "<base64 value>" } } }
//! ```
//!
//! Keys and values are arbitrary bytes, so both are base64 encoded. Every
//! mutation rewrites the whole file while holding the store mutex; the new
//! content is written next to the target and renamed over it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use binip_core::error::{StoreError, StoreResult};
use binip_core::traits::{BucketDump, BucketStore};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

type Buckets = BTreeMap<String, BTreeMap<Vec<u8>, Vec<u8>>>;

/// On-disk document layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    buckets: BTreeMap<String, BTreeMap<String, String>>,
}

/// File-backed `BucketStore`
pub struct JsonBucketStore {
    path: PathBuf,
    buckets: Mutex<Buckets>,
}

impl JsonBucketStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store (nothing is written until the
    /// first mutation); the parent directory is created if needed.
    ///
    /// # Errors
    /// `StoreError::Io` if the directory or file cannot be accessed,
    /// `StoreError::Corrupt` if the file exists but is not a valid document.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StoreError::Io(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        let buckets = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Buckets::new(),
            Ok(bytes) => decode(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("store file {} not found, starting empty", path.display());
                Buckets::new()
            }
            Err(e) => {
                return Err(StoreError::Io(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        log::debug!(
            "opened store {} with {} bucket(s)",
            path.display(),
            buckets.len()
        );

        Ok(Self {
            path,
            buckets: Mutex::new(buckets),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the buckets and commit it once the file is written
    async fn update<F>(&self, change: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Buckets) -> StoreResult<()> + Send,
    {
        let mut buckets = self.buckets.lock().await;
        let mut next = buckets.clone();
        change(&mut next)?;
        self.persist(&next).await?;
        *buckets = next;
        Ok(())
    }

    async fn persist(&self, buckets: &Buckets) -> StoreResult<()> {
        let bytes = encode(buckets)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to write {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            StoreError::Io(format!("Failed to replace {}: {e}", self.path.display()))
        })
    }
}

#[async_trait]
impl BucketStore for JsonBucketStore {
    async fn get(&self, bucket: &str, key: &[u8]) -> Option<Vec<u8>> {
        let buckets = self.buckets.lock().await;
        buckets.get(bucket).and_then(|b| b.get(key)).cloned()
    }

    async fn put(&self, bucket: &str, key: &[u8], value: &[u8]) -> StoreResult<()> {
        self.update(|buckets| {
            buckets
                .entry(bucket.to_string())
                .or_default()
                .insert(key.to_vec(), value.to_vec());
            Ok(())
        })
        .await
    }

    async fn delete_bucket(&self, bucket: &str) -> StoreResult<()> {
        self.update(|buckets| {
            buckets
                .remove(bucket)
                .map(|_| ())
                .ok_or_else(|| StoreError::BucketNotFound(bucket.to_string()))
        })
        .await
    }

    async fn ensure_bucket(&self, bucket: &str) -> StoreResult<()> {
        if self.buckets.lock().await.contains_key(bucket) {
            return Ok(());
        }
        self.update(|buckets| {
            buckets.entry(bucket.to_string()).or_default();
            Ok(())
        })
        .await
    }

    async fn dump_all(&self) -> BucketDump {
        let buckets = self.buckets.lock().await;
        buckets
            .iter()
            .map(|(name, entries)| (name.clone(), entries.clone().into_iter().collect()))
            .collect()
    }
}

fn encode(buckets: &Buckets) -> StoreResult<Vec<u8>> {
    let document = Document {
        buckets: buckets
            .iter()
            .map(|(name, entries)| {
                let entries = entries
                    .iter()
                    .map(|(k, v)| (STANDARD.encode(k), STANDARD.encode(v)))
                    .collect();
                (name.clone(), entries)
            })
            .collect(),
    };
    serde_json::to_vec_pretty(&document).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn decode(bytes: &[u8]) -> StoreResult<Buckets> {
    let document: Document =
        serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupt(e.to_string()))?;

    document
        .buckets
        .into_iter()
        .map(|(name, entries)| {
            let entries = entries
                .into_iter()
                .map(|(k, v)| {
                    let key = STANDARD
                        .decode(&k)
                        .map_err(|e| StoreError::Corrupt(format!("bucket {name}: key {k:?}: {e}")))?;
                    let value = STANDARD.decode(&v).map_err(|e| {
                        StoreError::Corrupt(format!("bucket {name}: value of {k:?}: {e}"))
                    })?;
                    Ok((key, value))
                })
                .collect::<StoreResult<BTreeMap<_, _>>>()?;
            Ok((name, entries))
        })
        .collect()
}
