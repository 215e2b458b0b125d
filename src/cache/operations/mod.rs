/// 缓存操作
/// 在字符串缓存之上提供带类型的读写

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::cache::store::{CacheError, CacheStore};

// 书签缓存操作
pub mod bookmark;

// 用户缓存操作
pub mod user;

pub use bookmark::BookmarkCacheOperations;
pub use user::UserCacheOperations;

/// 读取并反序列化缓存值
pub(crate) async fn get_json<T: DeserializeOwned>(
    cache: &dyn CacheStore,
    key: &str,
) -> Result<Option<T>, CacheError> {
    match cache.get(key).await? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// 序列化后写入缓存
pub(crate) async fn set_json<T: Serialize + ?Sized>(
    cache: &dyn CacheStore,
    key: &str,
    value: &T,
    ttl: Duration,
) -> Result<(), CacheError> {
    let json = serde_json::to_string(value)?;
    cache.set(key, json, ttl).await
}
