//! Visit counter on top of a [`KvStore`]
//!
//! Each counter lives under `visits:<key>` as a decimal string. Reads never
//! fail from the caller's point of view: a missing, unparseable or
//! unreachable value counts as zero.
//!
//! `increment` is a plain read-modify-write. Two concurrent increments of the
//! same key can both read `n` and both write `n + 1`, so counts may come out
//! low under concurrent load on one key. The write itself is detached and is
//! not retried if it fails.
//!
//! A stored value too large for `u64` reads as 0, so the next increment
//! restarts that counter at 1.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{trace, warn};

use crate::runtime::BackgroundTasks;
use crate::storage::KvStore;

/// 存储 key 的命名空间前缀
pub const KEY_PREFIX: &str = "visits:";

#[derive(Clone)]
pub struct VisitCounter {
    store: Arc<dyn KvStore>,
    tasks: BackgroundTasks,
}

impl VisitCounter {
    pub fn new(store: Arc<dyn KvStore>, tasks: BackgroundTasks) -> Self {
        Self { store, tasks }
    }

    pub fn tasks(&self) -> &BackgroundTasks {
        &self.tasks
    }

    /// Current value without mutation.
    pub async fn read(&self, key: &str) -> u64 {
        let store_key = namespaced_key(key);
        match self.store.get(&store_key).await {
            Ok(Some(raw)) => parse_count(&raw),
            Ok(None) => 0,
            Err(e) => {
                warn!("Failed to read counter {}: {}", store_key, e);
                0
            }
        }
    }

    /// Bump the counter and return the new value.
    ///
    /// The value is returned as soon as it is computed; the write runs as a
    /// detached task.
    pub async fn increment(&self, key: &str) -> u64 {
        let next = self.read(key).await.saturating_add(1);

        let store = Arc::clone(&self.store);
        let store_key = namespaced_key(key);
        self.tasks.spawn("counter-write", async move {
            match store.put(&store_key, next.to_string()).await {
                Ok(()) => trace!("Counter {} written: {}", store_key, next),
                Err(e) => warn!("Dropped counter write {} = {}: {}", store_key, next, e),
            }
        });

        next
    }

    /// Read several counters concurrently.
    ///
    /// Keys are returned as supplied (not namespaced); duplicates collapse.
    pub async fn read_many(&self, keys: &[String]) -> BTreeMap<String, u64> {
        let values = join_all(keys.iter().map(|key| self.read(key))).await;
        keys.iter().cloned().zip(values).collect()
    }
}

#[inline]
pub fn namespaced_key(key: &str) -> String {
    format!("{}{}", KEY_PREFIX, key)
}

/// Lenient integer parse: skip leading whitespace, take the leading run of
/// ASCII digits. Anything else (including overflow) is 0.
pub fn parse_count(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::time::Duration;

    fn counter_with_store() -> (VisitCounter, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let counter = VisitCounter::new(store.clone(), BackgroundTasks::new());
        (counter, store)
    }

    #[test]
    fn test_namespaced_key() {
        assert_eq!(namespaced_key("home"), "visits:home");
        assert_eq!(namespaced_key(""), "visits:");
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("42"), 42);
        assert_eq!(parse_count("  7"), 7);
        assert_eq!(parse_count("12abc"), 12);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("-3"), 0);
        assert_eq!(parse_count("99999999999999999999999"), 0);
    }

    #[tokio::test]
    async fn test_increment_from_absent() {
        let (counter, store) = counter_with_store();

        assert_eq!(counter.increment("home").await, 1);
        assert!(counter.tasks().drain(Duration::from_secs(1)).await);

        assert_eq!(
            store.get("visits:home").await.unwrap().as_deref(),
            Some("1")
        );
        assert_eq!(counter.read("home").await, 1);
    }

    #[tokio::test]
    async fn test_increment_over_garbage_value_restarts_at_one() {
        let (counter, store) = counter_with_store();
        store.put("visits:x", "NaN".to_string()).await.unwrap();

        assert_eq!(counter.read("x").await, 0);
        assert_eq!(counter.increment("x").await, 1);
    }

    #[tokio::test]
    async fn test_increment_over_overflowing_value_restarts_at_one() {
        let (counter, store) = counter_with_store();
        store
            .put("visits:huge", "18446744073709551616".to_string())
            .await
            .unwrap();

        assert_eq!(counter.read("huge").await, 0);
        assert_eq!(counter.increment("huge").await, 1);
    }

    #[tokio::test]
    async fn test_read_many_collapses_duplicates() {
        let (counter, store) = counter_with_store();
        store.put("visits:a", "3".to_string()).await.unwrap();

        let keys = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let result = counter.read_many(&keys).await;

        assert_eq!(result.len(), 2);
        assert_eq!(result["a"], 3);
        assert_eq!(result["b"], 0);
    }
}
