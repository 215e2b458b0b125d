use std::sync::Arc;
use std::time::Duration;

use crate::cache::keys::user_key;
use crate::cache::operations::{get_json, set_json};
use crate::cache::store::{CacheError, CacheStore};
use crate::database::models::user::PublicUser;

/// 用户资料缓存默认过期时间（秒）
pub const USER_CACHE_EXPIRE: u64 = 60;

/// 用户资料缓存操作
#[derive(Clone)]
pub struct UserCacheOperations {
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl UserCacheOperations {
    pub fn new(cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// 将用户资料缓存，调用方保证已去除密码哈希
    pub async fn cache_user(&self, user: &PublicUser) -> Result<(), CacheError> {
        set_json(self.cache.as_ref(), &user_key(user.id), user, self.ttl).await
    }

    /// 从缓存获取用户资料
    pub async fn get_cached_user(&self, user_id: i32) -> Result<Option<PublicUser>, CacheError> {
        get_json(self.cache.as_ref(), &user_key(user_id)).await
    }

    /// 从缓存中删除用户
    pub async fn remove_user_from_cache(&self, user_id: i32) -> Result<(), CacheError> {
        self.cache.delete(&user_key(user_id)).await
    }
}
