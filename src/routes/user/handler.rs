use axum::{
    extract::{Extension, Json, State},
    response::IntoResponse,
};

use crate::{
    AppState, database::PublicUser, error::AppError, utils::success_to_api_response,
};

use super::model::EditUserRequest;

/// 当前登录用户
#[axum::debug_handler]
pub async fn get_me(Extension(user): Extension<PublicUser>) -> impl IntoResponse {
    success_to_api_response(user)
}

/// 修改当前用户资料
#[axum::debug_handler]
pub async fn edit_user(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
    Json(req): Json<EditUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let updated = state.user_service().edit_user(user.id, req.into()).await?;

    Ok(success_to_api_response(updated))
}
