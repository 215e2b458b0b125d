//! 内存存储实现
//!
//! 与 PostgreSQL 实现遵守相同的约束（自增 ID、邮箱唯一），用于测试和本地调试。

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

use crate::database::error::StoreError;
use crate::database::models::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::database::models::user::{NewUser, UserEntity, UserPatch};
use crate::database::store::{BookmarkStore, UserStore};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, UserEntity>,
    bookmarks: BTreeMap<i32, Bookmark>,
    last_user_id: i32,
    last_bookmark_id: i32,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<UserEntity, StoreError> {
        let mut tables = self.tables.lock().await;

        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation("users_email_key".into()));
        }

        tables.last_user_id += 1;
        let now = Utc::now();
        let created = UserEntity {
            id: tables.last_user_id,
            email: user.email,
            hash: user.hash,
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserEntity>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: i32) -> Result<Option<UserEntity>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn update_user(&self, id: i32, patch: UserPatch) -> Result<UserEntity, StoreError> {
        let mut tables = self.tables.lock().await;

        if let Some(email) = &patch.email {
            if tables.users.values().any(|u| u.id != id && &u.email == email) {
                return Err(StoreError::UniqueViolation("users_email_key".into()));
            }
        }

        let user = tables.users.get_mut(&id).ok_or(StoreError::NotFound)?;
        if !patch.is_empty() {
            patch.apply(user);
            user.updated_at = Utc::now();
        }

        Ok(user.clone())
    }
}

#[async_trait]
impl BookmarkStore for InMemoryStore {
    async fn create_bookmark(
        &self,
        user_id: i32,
        bookmark: NewBookmark,
    ) -> Result<Bookmark, StoreError> {
        let mut tables = self.tables.lock().await;

        tables.last_bookmark_id += 1;
        let now = Utc::now();
        let created = Bookmark {
            id: tables.last_bookmark_id,
            user_id,
            title: bookmark.title,
            description: bookmark.description,
            link: bookmark.link,
            created_at: now,
            updated_at: now,
        };
        tables.bookmarks.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_bookmarks_by_user(&self, user_id: i32) -> Result<Vec<Bookmark>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .bookmarks
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_bookmark(&self, id: i32, user_id: i32) -> Result<Option<Bookmark>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .bookmarks
            .get(&id)
            .filter(|b| b.user_id == user_id)
            .cloned())
    }

    async fn update_bookmark(
        &self,
        id: i32,
        patch: BookmarkPatch,
    ) -> Result<Bookmark, StoreError> {
        let mut tables = self.tables.lock().await;

        let bookmark = tables.bookmarks.get_mut(&id).ok_or(StoreError::NotFound)?;
        if !patch.is_empty() {
            patch.apply(bookmark);
            bookmark.updated_at = Utc::now();
        }

        Ok(bookmark.clone())
    }

    async fn delete_bookmark(&self, id: i32) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        tables
            .bookmarks
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
