// 业务服务
// 组合持久化存储与缓存，对外提供认证、会话、用户与书签操作

pub mod auth;
pub mod bookmark;
pub mod session;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{AccessToken, AuthService};
pub use bookmark::BookmarkService;
pub use session::SessionService;
pub use user::UserService;
