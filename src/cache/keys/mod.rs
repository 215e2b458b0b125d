/// 缓存键模块
/// 每个用户独立的键，天然按用户分区

// 书签缓存键模块
pub mod bookmark_keys;

// 用户缓存键模块
pub mod user_keys;

pub use bookmark_keys::bookmarks_key;
pub use user_keys::user_key;
