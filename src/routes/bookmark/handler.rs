use axum::{
    extract::{Extension, Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState, database::PublicUser, error::AppError, middleware::ensure_bookmark_owner,
    utils::success_to_api_response,
};

use super::model::{CreateBookmarkRequest, EditBookmarkRequest};

/// 获取当前用户的全部书签
#[axum::debug_handler]
pub async fn get_bookmarks(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
) -> Result<impl IntoResponse, AppError> {
    let bookmarks = state.bookmark_service().get_bookmarks(user.id).await?;
    Ok(success_to_api_response(bookmarks))
}

/// 创建书签
#[axum::debug_handler]
pub async fn create_bookmark(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
    Json(req): Json<CreateBookmarkRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let bookmark = state
        .bookmark_service()
        .create_bookmark(user.id, req.into())
        .await?;
    tracing::debug!("User {} created bookmark {}", user.id, bookmark.id);

    Ok((StatusCode::CREATED, success_to_api_response(bookmark)))
}

/// 按ID获取书签，查询本身限定在当前用户名下，不单独校验归属
#[axum::debug_handler]
pub async fn get_bookmark_by_id(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
    Path(bookmark_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let bookmark = state
        .bookmark_service()
        .get_bookmark_by_id(user.id, bookmark_id)
        .await?;
    Ok(success_to_api_response(bookmark))
}

#[axum::debug_handler]
pub async fn edit_bookmark_by_id(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
    Path(bookmark_id): Path<i32>,
    Json(req): Json<EditBookmarkRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_bookmark_owner(&state, user.id, bookmark_id).await?;

    let bookmark = state
        .bookmark_service()
        .edit_bookmark_by_id(user.id, bookmark_id, req.into())
        .await?;
    Ok(success_to_api_response(bookmark))
}

#[axum::debug_handler]
pub async fn delete_bookmark_by_id(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
    Path(bookmark_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ensure_bookmark_owner(&state, user.id, bookmark_id).await?;

    state
        .bookmark_service()
        .delete_bookmark_by_id(user.id, bookmark_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
