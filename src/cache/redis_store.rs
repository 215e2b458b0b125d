use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::store::{CacheError, CacheStore};

/// Redis 缓存实现
#[derive(Clone)]
pub struct RedisCacheStore {
    client: Arc<RedisClient>,
}

impl RedisCacheStore {
    pub fn new(client: Arc<RedisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let result: Option<String> = conn.get(key).await?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        // PSETEX 以毫秒为单位
        let _: () = conn.pset_ex(key, value, ttl.as_millis() as u64).await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.del(key).await?;
        Ok(())
    }
}
