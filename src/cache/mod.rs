// 缓存模块
// 包含缓存存储接口、缓存键、缓存数据结构和操作逻辑

pub mod keys;
pub mod memory_store;
pub mod models;
pub mod operations;
pub mod redis_store;
pub mod store;

// 重新导出常用类型，方便其他模块使用
pub use memory_store::MemoryCacheStore;
pub use models::bookmark::CachedBookmarks;
pub use operations::{BookmarkCacheOperations, UserCacheOperations};
pub use redis_store::RedisCacheStore;
pub use store::{CacheError, CacheStore};
