use async_trait::async_trait;
use dashmap::DashMap;
use tracing::trace;

use super::KvStore;
use crate::errors::Result;

/// 进程内存储，适合单机部署和测试
#[derive(Default)]
pub struct MemoryStore {
    data: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.data.get(key).map(|v| v.value().clone());
        trace!("MemoryStore::get {} -> {:?}", key, value);
        Ok(value)
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        trace!("MemoryStore::put {} = {}", key, value);
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("visits:nope").await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.put("visits:a", "1".to_string()).await.unwrap();
        store.put("visits:a", "2".to_string()).await.unwrap();

        assert_eq!(store.get("visits:a").await.unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }
}
