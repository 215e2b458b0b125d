use axum::Json;
use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password.as_bytes(), cost)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password.as_bytes(), hash)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,      // 用户ID
    pub email: String, // 用户邮箱
    pub iat: i64,      // 签发时间
    pub exp: i64,      // 过期时间
}

impl Claims {
    pub fn new(user_id: i32, email: &str, issued_at: i64, ttl: std::time::Duration) -> Self {
        Self {
            sub: user_id,
            email: email.to_string(),
            iat: issued_at,
            exp: issued_at + ttl.as_secs() as i64,
        }
    }
}

/// 使用配置中的密钥签名，HS256
pub fn sign_claims(claims: &Claims, config: &Config) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
}

pub fn generate_token(
    user_id: i32,
    email: &str,
    config: &Config,
) -> Result<(String, i64), jsonwebtoken::errors::Error> {
    let claims = Claims::new(user_id, email, Utc::now().timestamp(), config.jwt_expiration());
    let token = sign_claims(&claims, config)?;

    Ok((token, claims.exp))
}

/// 校验签名与过期时间
pub fn verify_token(token: &str, config: &Config) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

/// 通用的API响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 错误码，0表示成功
    pub code: i32,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp_data: Option<T>,
}

pub fn success_to_api_response<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        code: error_codes::SUCCESS,
        msg: "success".into(),
        resp_data: Some(data),
    })
}

pub fn error_to_api_response<T>(code: i32, msg: String) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        code,
        msg,
        resp_data: None,
    })
}

pub mod error_codes {
    pub const SUCCESS: i32 = 0;
    pub const VALIDATION_ERROR: i32 = 1000;
    pub const USER_EXISTS: i32 = 1001;
    pub const AUTH_FAILED: i32 = 1002;
    pub const PERMISSION_DENIED: i32 = 1003;
    pub const NOT_FOUND: i32 = 1004;
    pub const UNAUTHORIZED: i32 = 1006;
    pub const INTERNAL_ERROR: i32 = 5000;
}
