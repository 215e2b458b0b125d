use serde::Deserialize;

use crate::database::{BookmarkPatch, NewBookmark};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

impl CreateBookmarkRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title should not be empty".into()));
        }
        if self.link.trim().is_empty() {
            return Err(AppError::Validation("link should not be empty".into()));
        }
        Ok(())
    }
}

impl From<CreateBookmarkRequest> for NewBookmark {
    fn from(req: CreateBookmarkRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            link: req.link,
        }
    }
}

/// 所有字段可选，只更新提交的字段
#[derive(Debug, Default, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl From<EditBookmarkRequest> for BookmarkPatch {
    fn from(req: EditBookmarkRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            link: req.link,
        }
    }
}
