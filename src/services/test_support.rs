use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

use crate::cache::store::{CacheError, CacheStore};
use crate::database::models::bookmark::Bookmark;
use crate::database::models::user::UserEntity;

/// 所有操作都失败的缓存，模拟 Redis 不可用
pub(crate) struct FailingCache;

#[async_trait]
impl CacheStore for FailingCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(CacheError::Backend("connection refused".into()))
    }

    async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> Result<(), CacheError> {
        Err(CacheError::Backend("connection refused".into()))
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError::Backend("connection refused".into()))
    }
}

pub(crate) fn bookmark(id: i32, user_id: i32) -> Bookmark {
    let now = Utc::now();
    Bookmark {
        id,
        user_id,
        title: format!("title {}", id),
        description: Some(format!("description {}", id)),
        link: format!("http://example.com/{}", id),
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn user(id: i32, email: &str) -> UserEntity {
    let now = Utc::now();
    UserEntity {
        id,
        email: email.to_string(),
        hash: "$2b$04$not-a-real-hash".into(),
        first_name: Some("Vlad".into()),
        last_name: None,
        created_at: now,
        updated_at: now,
    }
}
