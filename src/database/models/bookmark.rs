use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 书签数据库实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Bookmark {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewBookmark {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

/// 书签的部分更新，`None` 表示保持不变
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl BookmarkPatch {
    /// 只合并本次提交的字段，其余字段原样保留
    pub fn apply(&self, bookmark: &mut Bookmark) {
        if let Some(title) = &self.title {
            bookmark.title = title.clone();
        }
        if let Some(description) = &self.description {
            bookmark.description = Some(description.clone());
        }
        if let Some(link) = &self.link {
            bookmark.link = link.clone();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.link.is_none()
    }
}
