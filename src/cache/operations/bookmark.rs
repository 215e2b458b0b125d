use std::sync::Arc;
use std::time::Duration;

use crate::cache::keys::bookmarks_key;
use crate::cache::models::bookmark::CachedBookmarks;
use crate::cache::operations::{get_json, set_json};
use crate::cache::store::{CacheError, CacheStore};

/// 书签集合缓存默认过期时间（秒）
pub const BOOKMARK_CACHE_EXPIRE: u64 = 15 * 60; // 15分钟

/// 书签集合缓存操作
#[derive(Clone)]
pub struct BookmarkCacheOperations {
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl BookmarkCacheOperations {
    pub fn new(cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// 获取用户的书签集合缓存，`None` 表示未知而非空
    pub async fn get_collection(
        &self,
        user_id: i32,
    ) -> Result<Option<CachedBookmarks>, CacheError> {
        get_json(self.cache.as_ref(), &bookmarks_key(user_id)).await
    }

    /// 写入（覆盖）用户的书签集合，同时刷新过期时间
    pub async fn store_collection(
        &self,
        user_id: i32,
        bookmarks: &CachedBookmarks,
    ) -> Result<(), CacheError> {
        set_json(self.cache.as_ref(), &bookmarks_key(user_id), bookmarks, self.ttl).await
    }
}
