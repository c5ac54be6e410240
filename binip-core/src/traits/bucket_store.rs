//! Partitioned key/value persistence abstract Trait

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::StoreResult;

/// System partition: `version`, `app_name`, `network_prefix`
pub const SYSTEM_BUCKET: &str = "system";

/// Partition reserved for record storage
pub const RECORDS_BUCKET: &str = "records";

/// Key of the persisted onboarding result
pub const NETWORK_PREFIX_KEY: &[u8] = b"network_prefix";

/// Key of the store format version
pub const VERSION_KEY: &[u8] = b"version";

/// Key of the application name
pub const APP_NAME_KEY: &[u8] = b"app_name";

/// Every bucket with its entries in key order (diagnostics only)
pub type BucketDump = BTreeMap<String, Vec<(Vec<u8>, Vec<u8>)>>;

/// Bucketed key/value store Trait
///
/// Implementations:
/// - `JsonBucketStore`: single JSON document on disk
/// - `MemoryBucketStore`: process memory (tests, dry runs)
///
/// Command tasks may run on several runtime threads, so implementations must
/// serialize their own writes.
#[async_trait]
pub trait BucketStore: Send + Sync {
    /// Read a value
    ///
    /// # Returns
    /// * `None` - bucket or key does not exist
    async fn get(&self, bucket: &str, key: &[u8]) -> Option<Vec<u8>>;

    /// Insert or overwrite a value, creating the bucket if needed
    async fn put(&self, bucket: &str, key: &[u8], value: &[u8]) -> StoreResult<()>;

    /// Delete a whole bucket with all its entries
    ///
    /// # Errors
    /// `StoreError::BucketNotFound` if the bucket does not exist
    async fn delete_bucket(&self, bucket: &str) -> StoreResult<()>;

    /// Create an empty bucket if it does not exist yet
    async fn ensure_bucket(&self, bucket: &str) -> StoreResult<()>;

    /// Snapshot of every bucket and its entries
    async fn dump_all(&self) -> BucketDump;
}
