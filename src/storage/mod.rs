//! Key-value storage backends
//!
//! The counter logic only needs `get`/`put` of string values. Backends are
//! built once at startup by [`StoreFactory`] and handed around as
//! `Arc<dyn KvStore>`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::{StoreBackend, StoreConfig};
use crate::errors::Result;

pub mod memory;
pub mod redis;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

#[async_trait]
pub trait KvStore: Send + Sync {
    /// 读取 key 对应的字符串值，不存在时返回 `None`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// 写入字符串值（覆盖）
    async fn put(&self, key: &str, value: String) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}

pub struct StoreFactory;

impl StoreFactory {
    pub async fn create(config: &StoreConfig) -> Result<Arc<dyn KvStore>> {
        let store: Arc<dyn KvStore> = match config.backend {
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
            StoreBackend::Redis => Arc::new(RedisStore::connect(&config.redis.url).await?),
        };

        info!("Using store backend: {}", store.backend_name());
        Ok(store)
    }
}
