use std::sync::Arc;
use std::time::Duration;

use crate::cache::operations::user::UserCacheOperations;
use crate::cache::store::CacheStore;
use crate::database::models::user::PublicUser;
use crate::database::store::UserStore;
use crate::error::AppError;

/// 会话身份解析，每个认证请求调用一次
///
/// 命中 `user<userId>` 时直接返回缓存；未命中时查库、去除密码哈希后缓存。
/// 用户被删除后，其令牌要等缓存过期才会失效。
pub struct SessionService {
    users: Arc<dyn UserStore>,
    cache: UserCacheOperations,
}

impl SessionService {
    pub fn new(users: Arc<dyn UserStore>, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            users,
            cache: UserCacheOperations::new(cache, ttl),
        }
    }

    pub async fn resolve_identity(&self, user_id: i32) -> Result<PublicUser, AppError> {
        match self.cache.get_cached_user(user_id).await {
            Ok(Some(user)) => {
                tracing::debug!("Get user {} from cache", user_id);
                return Ok(user);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to read user cache for {}: {}", user_id, e),
        }

        let user = self
            .users
            .find_user_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound)?;
        let profile = PublicUser::from(user);

        if let Err(e) = self.cache.cache_user(&profile).await {
            tracing::warn!("Failed to cache user {}: {}", user_id, e);
        }

        Ok(profile)
    }
}
