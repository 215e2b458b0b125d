//! 进程内缓存
//!
//! 未配置 Redis 时作为后备，也用于测试。过期时间基于 `tokio::time::Instant`，
//! 因此测试中可以暂停并推进时钟。

use async_trait::async_trait;
use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;

use crate::cache::store::{CacheError, CacheStore};

struct Entry {
    value: String,
    expires_at: Instant,
}

#[derive(Default)]
pub struct MemoryCacheStore {
    entries: DashMap<String, Entry>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let now = Instant::now();

        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > now {
                return Ok(Some(entry.value.clone()));
            }
        }

        // 读取时惰性清理过期条目
        self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
        Ok(None)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        self.entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.remove(key);
        Ok(())
    }
}
