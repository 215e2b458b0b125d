use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::{AppState, error::AppError, utils::verify_token};

/// 校验 Bearer 令牌并解析当前用户
///
/// 解析出的 [`PublicUser`](crate::database::PublicUser) 以 Extension 的形式交给处理器。
pub async fn auth_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(&mut parts, &state)
            .await
            .map_err(|_| AppError::Unauthorized)?;

    let claims = verify_token(bearer.token(), &state.config).map_err(|e| {
        tracing::debug!("Rejected token: {}", e);
        AppError::Unauthorized
    })?;

    let user = match state.session_service().resolve_identity(claims.sub).await {
        Ok(user) => user,
        Err(AppError::NotFound) => return Err(AppError::Unauthorized),
        Err(e) => return Err(e),
    };

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
