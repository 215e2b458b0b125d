//! 持久化存储接口
//!
//! 业务层只依赖这两个 trait，PostgreSQL 与内存实现都在 `operations` / `memory` 中。

use async_trait::async_trait;

use crate::database::error::StoreError;
use crate::database::models::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::database::models::user::{NewUser, UserEntity, UserPatch};

/// 用户存储。邮箱唯一，重复插入返回 [`StoreError::UniqueViolation`]。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<UserEntity, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserEntity>, StoreError>;

    async fn find_user_by_id(&self, id: i32) -> Result<Option<UserEntity>, StoreError>;

    async fn update_user(&self, id: i32, patch: UserPatch) -> Result<UserEntity, StoreError>;
}

/// 书签存储
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    async fn create_bookmark(
        &self,
        user_id: i32,
        bookmark: NewBookmark,
    ) -> Result<Bookmark, StoreError>;

    async fn find_bookmarks_by_user(&self, user_id: i32) -> Result<Vec<Bookmark>, StoreError>;

    /// 同时按 ID 与所属用户过滤
    async fn find_bookmark(&self, id: i32, user_id: i32) -> Result<Option<Bookmark>, StoreError>;

    /// 仅按 ID 更新，所有权检查在上游完成
    async fn update_bookmark(&self, id: i32, patch: BookmarkPatch)
    -> Result<Bookmark, StoreError>;

    async fn delete_bookmark(&self, id: i32) -> Result<(), StoreError>;
}
