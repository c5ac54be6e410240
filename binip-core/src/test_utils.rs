//! 测试辅助模块
//!
//! 提供内存版 `BucketStore` mock 和驱动整个事件循环的便捷函数。

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::dispatch::{Command, Dispatcher};
use crate::error::{StoreError, StoreResult};
use crate::machine::StateMachine;
use crate::router;
use crate::traits::{BucketDump, BucketStore};

// ===== MockBucketStore =====

pub struct MockBucketStore {
    buckets: RwLock<BTreeMap<String, BTreeMap<Vec<u8>, Vec<u8>>>>,
    /// 如果 Some，put 时返回此错误（用于测试写入失败路径）
    put_error: RwLock<Option<String>>,
}

impl MockBucketStore {
    pub fn new() -> Self {
        Self {
            buckets: RwLock::new(BTreeMap::new()),
            put_error: RwLock::new(None),
        }
    }

    pub async fn set_put_error(&self, err: Option<String>) {
        *self.put_error.write().await = err;
    }
}

#[async_trait]
impl BucketStore for MockBucketStore {
    async fn get(&self, bucket: &str, key: &[u8]) -> Option<Vec<u8>> {
        self.buckets.read().await.get(bucket)?.get(key).cloned()
    }

    async fn put(&self, bucket: &str, key: &[u8], value: &[u8]) -> StoreResult<()> {
        if let Some(ref msg) = *self.put_error.read().await {
            return Err(StoreError::Io(msg.clone()));
        }
        self.buckets
            .write()
            .await
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    async fn delete_bucket(&self, bucket: &str) -> StoreResult<()> {
        self.buckets
            .write()
            .await
            .remove(bucket)
            .map(|_| ())
            .ok_or_else(|| StoreError::BucketNotFound(bucket.to_string()))
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
        self.buckets
            .read()
            .await
            .iter()
            .map(|(name, entries)| {
                let entries = entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                (name.clone(), entries)
            })
            .collect()
    }
}

// ===== 事件循环驱动 =====

/// 调度命令并把产生的事件全部路由回状态机，直到队列清空且没有在途任务
pub async fn run_until_idle(
    machine: &mut StateMachine,
    dispatcher: &mut Dispatcher,
    commands: Vec<Command>,
) {
    dispatcher.schedule_all(commands);
    while let Some(event) = dispatcher.next().await {
        let commands = router::handle(machine, event);
        dispatcher.schedule_all(commands);
    }
}
