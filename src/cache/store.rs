use async_trait::async_trait;
use std::time::Duration;

/// 缓存层错误，只在缓存操作内部流转，不会返回给调用方
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("cache backend error: {0}")]
    Backend(String),
}

/// 键值缓存，值为 JSON 文本，过期后视为不存在
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
