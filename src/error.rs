use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::database::StoreError;
use crate::utils::{error_codes, error_to_api_response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 注册时邮箱已被占用
    #[error("Credentials taken")]
    CredentialsTaken,
    /// 邮箱不存在或密码错误，两种情况不作区分
    #[error("Credentials incorrect")]
    InvalidCredentials,
    #[error("Resource not found")]
    NotFound,
    #[error("Access to the resource denied")]
    Forbidden,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, i32) {
        match self {
            AppError::CredentialsTaken => (StatusCode::FORBIDDEN, error_codes::USER_EXISTS),
            AppError::InvalidCredentials => (StatusCode::FORBIDDEN, error_codes::AUTH_FAILED),
            AppError::Forbidden => (StatusCode::FORBIDDEN, error_codes::PERMISSION_DENIED),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED),
            AppError::NotFound | AppError::Store(StoreError::NotFound) => {
                (StatusCode::NOT_FOUND, error_codes::NOT_FOUND)
            }
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
            AppError::Store(_) | AppError::Token(_) | AppError::Hash(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // 内部错误不向客户端暴露细节
        let msg = if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
            "内部服务器错误".to_string()
        } else {
            self.to_string()
        };

        (status, error_to_api_response::<()>(code, msg)).into_response()
    }
}
