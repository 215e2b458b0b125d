use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, error::AppError, utils::success_to_api_response};

use super::model::AuthRequest;

/// 注册新用户
#[axum::debug_handler]
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let token = state
        .auth_service()
        .signup(&req.email, &req.password)
        .await?;

    Ok((StatusCode::CREATED, success_to_api_response(token)))
}

/// 登录
#[axum::debug_handler]
pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let token = state
        .auth_service()
        .signin(&req.email, &req.password)
        .await?;

    Ok((StatusCode::OK, success_to_api_response(token)))
}
