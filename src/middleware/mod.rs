mod auth;
mod error_handler;
mod ownership;

pub use auth::auth_middleware;
pub use error_handler::log_errors;
pub use ownership::ensure_bookmark_owner;
