//! 书签服务
//!
//! 以用户为单位缓存完整书签集合（键 `bookmarks<userId>`）。读取走 read-through，
//! 写操作先落库（创建）或先改缓存（编辑、删除），缓存只在集合已存在时同步修改，
//! 单条操作不会凭空创建集合缓存。缓存失败只记录日志，不影响返回结果。

use std::sync::Arc;
use std::time::Duration;

use crate::cache::models::bookmark::CachedBookmarks;
use crate::cache::operations::bookmark::BookmarkCacheOperations;
use crate::cache::store::CacheStore;
use crate::database::models::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::database::store::BookmarkStore;
use crate::error::AppError;

pub struct BookmarkService {
    store: Arc<dyn BookmarkStore>,
    cache: BookmarkCacheOperations,
}

impl BookmarkService {
    pub fn new(store: Arc<dyn BookmarkStore>, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            store,
            cache: BookmarkCacheOperations::new(cache, ttl),
        }
    }

    /// 读取缓存集合，缓存异常按未命中处理
    async fn cached_collection(&self, user_id: i32) -> Option<CachedBookmarks> {
        match self.cache.get_collection(user_id).await {
            Ok(collection) => collection,
            Err(e) => {
                tracing::warn!("Failed to read bookmark cache for user {}: {}", user_id, e);
                None
            }
        }
    }

    async fn write_collection(&self, user_id: i32, collection: &CachedBookmarks) {
        if let Err(e) = self.cache.store_collection(user_id, collection).await {
            tracing::warn!("Failed to write bookmark cache for user {}: {}", user_id, e);
        }
    }

    /// 获取用户全部书签，顺序不保证
    pub async fn get_bookmarks(&self, user_id: i32) -> Result<Vec<Bookmark>, AppError> {
        if let Some(collection) = self.cached_collection(user_id).await {
            tracing::debug!("Get bookmarks from cache for user {}", user_id);
            return Ok(collection.into_bookmarks());
        }

        let bookmarks = self.store.find_bookmarks_by_user(user_id).await?;

        self.write_collection(user_id, &CachedBookmarks::from_bookmarks(&bookmarks))
            .await;
        tracing::debug!(
            "Set {} bookmarks to cache for user {}",
            bookmarks.len(),
            user_id
        );

        Ok(bookmarks)
    }

    /// 创建书签，先写库拿到ID，再同步到已存在的集合缓存
    pub async fn create_bookmark(
        &self,
        user_id: i32,
        bookmark: NewBookmark,
    ) -> Result<Bookmark, AppError> {
        let created = self.store.create_bookmark(user_id, bookmark).await?;

        if let Some(mut collection) = self.cached_collection(user_id).await {
            collection.insert(created.clone());
            self.write_collection(user_id, &collection).await;
        }

        Ok(created)
    }

    pub async fn get_bookmark_by_id(
        &self,
        user_id: i32,
        bookmark_id: i32,
    ) -> Result<Bookmark, AppError> {
        if let Some(collection) = self.cached_collection(user_id).await {
            if let Some(bookmark) = collection.get(bookmark_id) {
                return Ok(bookmark.clone());
            }
        }

        self.store
            .find_bookmark(bookmark_id, user_id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// 编辑书签
    ///
    /// 缓存中的副本在写库之前用本次提交的字段合并，不回读数据库更新后的行；
    /// 返回值是数据库更新后的记录。
    pub async fn edit_bookmark_by_id(
        &self,
        user_id: i32,
        bookmark_id: i32,
        patch: BookmarkPatch,
    ) -> Result<Bookmark, AppError> {
        if let Some(mut collection) = self.cached_collection(user_id).await {
            if let Some(cached) = collection.get_mut(bookmark_id) {
                patch.apply(cached);
                self.write_collection(user_id, &collection).await;
            }
        }

        let updated = self.store.update_bookmark(bookmark_id, patch).await?;
        Ok(updated)
    }

    pub async fn delete_bookmark_by_id(
        &self,
        user_id: i32,
        bookmark_id: i32,
    ) -> Result<(), AppError> {
        if let Some(mut collection) = self.cached_collection(user_id).await {
            if collection.remove(bookmark_id).is_some() {
                self.write_collection(user_id, &collection).await;
            }
        }

        self.store.delete_bookmark(bookmark_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::keys::bookmarks_key;
    use crate::cache::memory_store::MemoryCacheStore;
    use crate::database::error::StoreError;
    use crate::database::store::MockBookmarkStore;
    use crate::services::test_support::{FailingCache, bookmark};

    const TTL: Duration = Duration::from_secs(15 * 60);

    fn service(store: MockBookmarkStore, cache: Arc<dyn CacheStore>) -> BookmarkService {
        BookmarkService::new(Arc::new(store), cache, TTL)
    }

    fn ids(mut bookmarks: Vec<Bookmark>) -> Vec<i32> {
        bookmarks.sort_by_key(|b| b.id);
        bookmarks.into_iter().map(|b| b.id).collect()
    }

    async fn cached(cache: &MemoryCacheStore, user_id: i32) -> Option<CachedBookmarks> {
        cache
            .get(&bookmarks_key(user_id))
            .await
            .unwrap()
            .map(|json| serde_json::from_str(&json).unwrap())
    }

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_find_bookmarks_by_user()
            .withf(|user_id| *user_id == 1)
            .times(1)
            .returning(|_| Ok(vec![bookmark(1, 1), bookmark(2, 1)]));
        let service = service(store, Arc::new(MemoryCacheStore::new()));

        let first = service.get_bookmarks(1).await.unwrap();
        let second = service.get_bookmarks(1).await.unwrap();

        assert_eq!(ids(first), vec![1, 2]);
        assert_eq!(ids(second), vec![1, 2]);
    }

    #[tokio::test]
    async fn empty_result_is_cached_as_empty_mapping() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_find_bookmarks_by_user()
            .times(1)
            .returning(|_| Ok(vec![]));
        let cache = Arc::new(MemoryCacheStore::new());
        let service = service(store, cache.clone());

        assert!(service.get_bookmarks(3).await.unwrap().is_empty());
        assert_eq!(
            cache.get("bookmarks3").await.unwrap().as_deref(),
            Some("{}")
        );
        assert!(service.get_bookmarks(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_without_cached_collection_leaves_cache_empty() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_create_bookmark()
            .times(1)
            .returning(|user_id, new| {
                let mut created = bookmark(7, user_id);
                created.title = new.title;
                created.description = new.description;
                created.link = new.link;
                Ok(created)
            });
        let cache = Arc::new(MemoryCacheStore::new());
        let service = service(store, cache.clone());

        let created = service
            .create_bookmark(
                1,
                NewBookmark {
                    title: "A".into(),
                    description: None,
                    link: "http://a".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(created.id, 7);
        assert_eq!(created.user_id, 1);
        assert_eq!(created.description, None);
        assert!(cached(&cache, 1).await.is_none());
    }

    #[tokio::test]
    async fn create_with_cached_collection_is_readable_without_store() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_find_bookmarks_by_user()
            .times(1)
            .returning(|_| Ok(vec![bookmark(1, 1)]));
        store
            .expect_create_bookmark()
            .times(1)
            .returning(|user_id, _| Ok(bookmark(7, user_id)));
        store.expect_find_bookmark().never();
        let service = service(store, Arc::new(MemoryCacheStore::new()));

        service.get_bookmarks(1).await.unwrap();
        let created = service
            .create_bookmark(
                1,
                NewBookmark {
                    title: "title 7".into(),
                    description: Some("description 7".into()),
                    link: "http://example.com/7".into(),
                },
            )
            .await
            .unwrap();

        let fetched = service.get_bookmark_by_id(1, 7).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(ids(service.get_bookmarks(1).await.unwrap()), vec![1, 7]);
    }

    #[tokio::test]
    async fn get_by_id_falls_back_to_store_with_owner_filter() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_find_bookmark()
            .withf(|id, user_id| *id == 5 && *user_id == 2)
            .times(1)
            .returning(|id, user_id| Ok(Some(bookmark(id, user_id))));
        let service = service(store, Arc::new(MemoryCacheStore::new()));

        let found = service.get_bookmark_by_id(2, 5).await.unwrap();
        assert_eq!(found.id, 5);
    }

    #[tokio::test]
    async fn get_by_id_reports_not_found() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_find_bookmark()
            .times(1)
            .returning(|_, _| Ok(None));
        let service = service(store, Arc::new(MemoryCacheStore::new()));

        let err = service.get_bookmark_by_id(1, 99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn edit_changes_only_patched_fields_in_cache_and_store() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_find_bookmarks_by_user()
            .times(1)
            .returning(|_| Ok(vec![bookmark(1, 1), bookmark(2, 1)]));
        store
            .expect_update_bookmark()
            .withf(|id, patch| *id == 1 && patch.title.as_deref() == Some("new"))
            .times(1)
            .returning(|id, patch| {
                let mut row = bookmark(id, 1);
                patch.apply(&mut row);
                Ok(row)
            });
        let cache = Arc::new(MemoryCacheStore::new());
        let service = service(store, cache.clone());
        service.get_bookmarks(1).await.unwrap();

        let patch = BookmarkPatch {
            title: Some("new".into()),
            ..Default::default()
        };
        let updated = service.edit_bookmark_by_id(1, 1, patch).await.unwrap();

        assert_eq!(updated.title, "new");
        assert_eq!(updated.description.as_deref(), Some("description 1"));
        assert_eq!(updated.link, "http://example.com/1");

        let collection = cached(&cache, 1).await.unwrap();
        let cached_row = collection.get(1).unwrap();
        assert_eq!(cached_row.title, "new");
        assert_eq!(cached_row.description.as_deref(), Some("description 1"));
        assert_eq!(cached_row.link, "http://example.com/1");
        assert_eq!(collection.get(2).unwrap().title, "title 2");
    }

    #[tokio::test]
    async fn edit_of_uncached_id_does_not_touch_cache() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_find_bookmarks_by_user()
            .times(1)
            .returning(|_| Ok(vec![bookmark(1, 1)]));
        store
            .expect_update_bookmark()
            .times(1)
            .returning(|id, _| Ok(bookmark(id, 1)));
        let cache = Arc::new(MemoryCacheStore::new());
        let service = service(store, cache.clone());
        service.get_bookmarks(1).await.unwrap();
        let before = cached(&cache, 1).await.unwrap();

        service
            .edit_bookmark_by_id(
                1,
                42,
                BookmarkPatch {
                    link: Some("http://b".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(cached(&cache, 1).await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_removes_from_cache_and_store() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_find_bookmarks_by_user()
            .times(1)
            .returning(|_| Ok(vec![bookmark(1, 1), bookmark(2, 1)]));
        store
            .expect_delete_bookmark()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(()));
        store
            .expect_find_bookmark()
            .times(1)
            .returning(|_, _| Ok(None));
        let service = service(store, Arc::new(MemoryCacheStore::new()));
        service.get_bookmarks(1).await.unwrap();

        service.delete_bookmark_by_id(1, 1).await.unwrap();

        assert_eq!(ids(service.get_bookmarks(1).await.unwrap()), vec![2]);
        assert!(matches!(
            service.get_bookmark_by_id(1, 1).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn cache_failures_never_reach_the_caller() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_find_bookmarks_by_user()
            .times(2)
            .returning(|user_id| Ok(vec![bookmark(1, user_id)]));
        store
            .expect_create_bookmark()
            .times(1)
            .returning(|user_id, _| Ok(bookmark(2, user_id)));
        store
            .expect_update_bookmark()
            .times(1)
            .returning(|id, _| Ok(bookmark(id, 1)));
        store
            .expect_delete_bookmark()
            .times(1)
            .returning(|_| Ok(()));
        let service = service(store, Arc::new(FailingCache));

        assert_eq!(service.get_bookmarks(1).await.unwrap().len(), 1);
        assert_eq!(service.get_bookmarks(1).await.unwrap().len(), 1);
        let created = service
            .create_bookmark(
                1,
                NewBookmark {
                    title: "B".into(),
                    description: None,
                    link: "http://b".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(created.id, 2);
        service
            .edit_bookmark_by_id(1, 1, BookmarkPatch::default())
            .await
            .unwrap();
        service.delete_bookmark_by_id(1, 2).await.unwrap();
    }

    #[tokio::test]
    async fn store_errors_propagate_unchanged() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_find_bookmarks_by_user()
            .times(1)
            .returning(|_| Err(StoreError::Backend("connection reset".into())));
        let cache = Arc::new(MemoryCacheStore::new());
        let service = service(store, cache.clone());

        let err = service.get_bookmarks(1).await.unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Backend(ref m)) if m == "connection reset"));
        assert!(cached(&cache, 1).await.is_none());
    }
}
