use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    middleware::{auth_middleware, log_errors},
    routes,
};

// 认证相关的公开路由
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(routes::auth::signup))
        .route("/auth/signin", post(routes::auth::signin))
}

// 需要认证的用户与书签路由
fn protected_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/users/me", get(routes::user::get_me))
        .route("/users", axum::routing::patch(routes::user::edit_user))
        .route(
            "/bookmarks",
            get(routes::bookmark::get_bookmarks).post(routes::bookmark::create_bookmark),
        )
        .route(
            "/bookmarks/{id}",
            get(routes::bookmark::get_bookmark_by_id)
                .patch(routes::bookmark::edit_bookmark_by_id)
                .delete(routes::bookmark::delete_bookmark_by_id),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(auth_routes())
        .merge(protected_routes(&state));

    Router::new()
        .nest(&state.config.api_base_uri, api)
        .layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}
