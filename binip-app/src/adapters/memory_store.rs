//! In-process bucket store
//!
//! Backs the `test` command and unit tests; nothing survives the process.

use std::collections::BTreeMap;

use async_trait::async_trait;
use binip_core::error::{StoreError, StoreResult};
use binip_core::traits::{BucketDump, BucketStore};
use tokio::sync::RwLock;

type Buckets = BTreeMap<String, BTreeMap<Vec<u8>, Vec<u8>>>;

/// Volatile `BucketStore` keeping every bucket in memory
#[derive(Default)]
pub struct MemoryBucketStore {
    buckets: RwLock<Buckets>,
}

impl MemoryBucketStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BucketStore for MemoryBucketStore {
    async fn get(&self, bucket: &str, key: &[u8]) -> Option<Vec<u8>> {
        let buckets = self.buckets.read().await;
        buckets.get(bucket).and_then(|b| b.get(key)).cloned()
    }

    async fn put(&self, bucket: &str, key: &[u8], value: &[u8]) -> StoreResult<()> {
        let mut buckets = self.buckets.write().await;
        buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    async fn delete_bucket(&self, bucket: &str) -> StoreResult<()> {
        let mut buckets = self.buckets.write().await;
        match buckets.remove(bucket) {
            Some(_) => Ok(()),
            None => Err(StoreError::BucketNotFound(bucket.to_string())),
        }
    }

    async fn ensure_bucket(&self, bucket: &str) -> StoreResult<()> {
        self.buckets
            .write()
            .await
            .entry(bucket.to_string())
            .or_default();
        Ok(())
    }

    async fn dump_all(&self) -> BucketDump {
        let buckets = self.buckets.read().await;
        buckets
            .iter()
            .map(|(name, entries)| (name.clone(), entries.clone().into_iter().collect()))
            .collect()
    }
}
