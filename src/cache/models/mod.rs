/// 缓存数据模型
// 书签集合缓存模型
pub mod bookmark;

pub use bookmark::CachedBookmarks;
