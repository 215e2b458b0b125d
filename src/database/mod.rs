// 数据库模块
// 包含实体定义、存储接口以及 PostgreSQL / 内存两种实现

pub mod error;
pub mod memory;
pub mod models; // 数据库实体定义
pub mod operations; // 数据库操作实现
pub mod store;

// 重新导出常用类型，方便其他模块使用
pub use error::StoreError;
pub use memory::InMemoryStore;
pub use models::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
pub use models::user::{NewUser, PublicUser, UserEntity, UserPatch};
pub use operations::bookmark::BookmarkOperation;
pub use operations::user::UserOperation;
pub use store::{BookmarkStore, UserStore};
