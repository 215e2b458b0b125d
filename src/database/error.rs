/// 持久化层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// 违反唯一约束，例如邮箱重复
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Database(sqlx::Error),
    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::UniqueViolation(db.constraint().unwrap_or("unique").to_string())
            }
            other => StoreError::Database(other),
        }
    }
}
