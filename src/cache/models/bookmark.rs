use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::database::models::bookmark::Bookmark;

/// 用户书签集合缓存：书签ID字符串 -> 书签
///
/// 缓存存在时代表该用户的完整书签集合；空集合只会在数据库确认没有记录后写入。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CachedBookmarks(HashMap<String, Bookmark>);

impl CachedBookmarks {
    pub fn from_bookmarks(bookmarks: &[Bookmark]) -> Self {
        Self(
            bookmarks
                .iter()
                .map(|b| (b.id.to_string(), b.clone()))
                .collect(),
        )
    }

    pub fn get(&self, bookmark_id: i32) -> Option<&Bookmark> {
        self.0.get(&bookmark_id.to_string())
    }

    pub fn get_mut(&mut self, bookmark_id: i32) -> Option<&mut Bookmark> {
        self.0.get_mut(&bookmark_id.to_string())
    }

    pub fn insert(&mut self, bookmark: Bookmark) {
        self.0.insert(bookmark.id.to_string(), bookmark);
    }

    pub fn remove(&mut self, bookmark_id: i32) -> Option<Bookmark> {
        self.0.remove(&bookmark_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 顺序不固定
    pub fn into_bookmarks(self) -> Vec<Bookmark> {
        self.0.into_values().collect()
    }
}
