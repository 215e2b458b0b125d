use crate::{AppState, error::AppError};

/// 确认书签存在且属于当前用户，否则拒绝访问
pub async fn ensure_bookmark_owner(
    state: &AppState,
    user_id: i32,
    bookmark_id: i32,
) -> Result<(), AppError> {
    match state.bookmarks.find_bookmark(bookmark_id, user_id).await? {
        Some(_) => Ok(()),
        None => {
            tracing::debug!(
                "User {} denied access to bookmark {}",
                user_id,
                bookmark_id
            );
            Err(AppError::Forbidden)
        }
    }
}
