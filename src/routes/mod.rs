pub mod auth;
pub mod bookmark;
pub mod user;
