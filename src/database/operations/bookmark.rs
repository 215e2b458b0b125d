// 书签存储库
// 包含书签相关的数据库操作

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::database::error::StoreError;
use crate::database::models::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::database::store::BookmarkStore;

const BOOKMARK_COLUMNS: &str = "id, user_id, title, description, link, created_at, updated_at";

/// 书签存储库，处理所有与书签相关的数据库操作
pub struct BookmarkOperation {
    db: Arc<PgPool>,
}

impl BookmarkOperation {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Bookmark>, StoreError> {
        let query = format!("SELECT {} FROM bookmarks WHERE id = $1", BOOKMARK_COLUMNS);

        let bookmark = sqlx::query_as::<_, Bookmark>(&query)
            .bind(id)
            .fetch_optional(&*self.db)
            .await?;

        Ok(bookmark)
    }
}

#[async_trait]
impl BookmarkStore for BookmarkOperation {
    async fn create_bookmark(
        &self,
        user_id: i32,
        bookmark: NewBookmark,
    ) -> Result<Bookmark, StoreError> {
        let query = format!(
            r#"
            INSERT INTO bookmarks (user_id, title, description, link)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            BOOKMARK_COLUMNS
        );

        let created = sqlx::query_as::<_, Bookmark>(&query)
            .bind(user_id)
            .bind(&bookmark.title)
            .bind(&bookmark.description)
            .bind(&bookmark.link)
            .fetch_one(&*self.db)
            .await?;

        Ok(created)
    }

    async fn find_bookmarks_by_user(&self, user_id: i32) -> Result<Vec<Bookmark>, StoreError> {
        let query = format!(
            "SELECT {} FROM bookmarks WHERE user_id = $1 ORDER BY id",
            BOOKMARK_COLUMNS
        );

        let bookmarks = sqlx::query_as::<_, Bookmark>(&query)
            .bind(user_id)
            .fetch_all(&*self.db)
            .await?;

        Ok(bookmarks)
    }

    async fn find_bookmark(&self, id: i32, user_id: i32) -> Result<Option<Bookmark>, StoreError> {
        let query = format!(
            "SELECT {} FROM bookmarks WHERE id = $1 AND user_id = $2",
            BOOKMARK_COLUMNS
        );

        let bookmark = sqlx::query_as::<_, Bookmark>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&*self.db)
            .await?;

        Ok(bookmark)
    }

    async fn update_bookmark(
        &self,
        id: i32,
        patch: BookmarkPatch,
    ) -> Result<Bookmark, StoreError> {
        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(title) = patch.title {
            updates.push(format!("title = ${}", updates.len() + 1));
            params.push(title);
        }
        if let Some(description) = patch.description {
            updates.push(format!("description = ${}", updates.len() + 1));
            params.push(description);
        }
        if let Some(link) = patch.link {
            updates.push(format!("link = ${}", updates.len() + 1));
            params.push(link);
        }

        if updates.is_empty() {
            return self.find_by_id(id).await?.ok_or(StoreError::NotFound);
        }

        let query = format!(
            r#"
            UPDATE bookmarks
            SET {}, updated_at = NOW()
            WHERE id = ${}
            RETURNING {}
            "#,
            updates.join(", "),
            params.len() + 1,
            BOOKMARK_COLUMNS
        );

        let mut query = sqlx::query_as::<_, Bookmark>(&query);
        for param in params {
            query = query.bind(param);
        }

        let bookmark = query.bind(id).fetch_one(&*self.db).await?;
        Ok(bookmark)
    }

    async fn delete_bookmark(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&*self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
