use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tokio::sync::RwLock;
use tracing::{debug, error, trace};

use super::KvStore;
use crate::errors::{BadgeError, Result};

pub struct RedisStore {
    client: redis::Client,
    /// 持久化连接，使用 RwLock 保护
    connection: Arc<RwLock<Option<MultiplexedConnection>>>,
}

impl RedisStore {
    /// 创建客户端并用 PING 检查连通性
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(|e| {
            BadgeError::store_connection(format!("Invalid Redis URL '{}': {}", url, e))
        })?;

        let store = Self {
            client,
            connection: Arc::new(RwLock::new(None)),
        };

        let mut conn = store.get_connection().await.map_err(|e| {
            error!("Failed to connect to Redis at {}: {}", url, e);
            BadgeError::store_connection(format!("Redis connection failed: {e}"))
        })?;
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| BadgeError::store_connection(format!("Redis ping failed: {e}")))?;
        debug!("Redis connection test successful: {}", pong);

        Ok(store)
    }

    /// 获取或建立持久连接
    async fn get_connection(&self) -> std::result::Result<MultiplexedConnection, redis::RedisError> {
        {
            let conn_guard = self.connection.read().await;
            if let Some(ref conn) = *conn_guard {
                return Ok(conn.clone());
            }
        }

        let mut conn_guard = self.connection.write().await;

        // 双重检查，避免竞态条件
        if let Some(ref conn) = *conn_guard {
            return Ok(conn.clone());
        }

        let new_conn = self.client.get_multiplexed_async_connection().await?;
        *conn_guard = Some(new_conn.clone());
        debug!("Redis connection established and cached");

        Ok(new_conn)
    }

    /// 重置连接（在连接错误时调用）
    async fn reset_connection(&self) {
        let mut conn_guard = self.connection.write().await;
        *conn_guard = None;
        debug!("Redis connection reset due to error");
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                self.reset_connection().await;
                return Err(e.into());
            }
        };

        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => {
                trace!("RedisStore::get {} -> {:?}", key, value);
                Ok(value)
            }
            Err(e) => {
                // 连接可能已断开，重置连接
                self.reset_connection().await;
                Err(e.into())
            }
        }
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                self.reset_connection().await;
                return Err(e.into());
            }
        };

        match conn.set::<_, _, ()>(key, value).await {
            Ok(()) => {
                trace!("RedisStore::put {}", key);
                Ok(())
            }
            Err(e) => {
                self.reset_connection().await;
                Err(e.into())
            }
        }
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let result = RedisStore::connect("not a redis url").await;
        match result {
            Err(BadgeError::StoreConnection(msg)) => assert!(msg.contains("Invalid Redis URL")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("malformed URL must not connect"),
        }
    }
}
