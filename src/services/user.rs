use std::sync::Arc;
use std::time::Duration;

use crate::cache::operations::user::UserCacheOperations;
use crate::cache::store::CacheStore;
use crate::database::error::StoreError;
use crate::database::models::user::{PublicUser, UserPatch};
use crate::database::store::UserStore;
use crate::error::AppError;

pub struct UserService {
    users: Arc<dyn UserStore>,
    cache: UserCacheOperations,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            users,
            cache: UserCacheOperations::new(cache, ttl),
        }
    }

    /// 更新用户资料，返回值不含密码哈希
    ///
    /// 更新成功后删除 `user<userId>` 会话缓存，下一次请求重新读取资料。
    pub async fn edit_user(&self, user_id: i32, patch: UserPatch) -> Result<PublicUser, AppError> {
        let user = match self.users.update_user(user_id, patch).await {
            Ok(user) => user,
            Err(StoreError::UniqueViolation(_)) => return Err(AppError::CredentialsTaken),
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = self.cache.remove_user_from_cache(user_id).await {
            tracing::warn!("Failed to invalidate user cache for {}: {}", user_id, e);
        }

        Ok(PublicUser::from(user))
    }
}
