// 用户存储库
// 包含用户相关的数据库操作

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::database::error::StoreError;
use crate::database::models::user::{NewUser, UserEntity, UserPatch};
use crate::database::store::UserStore;

const USER_COLUMNS: &str = "id, email, hash, first_name, last_name, created_at, updated_at";

/// 用户存储库，处理所有与用户相关的数据库操作
pub struct UserOperation {
    db: Arc<PgPool>,
}

impl UserOperation {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for UserOperation {
    async fn create_user(&self, user: NewUser) -> Result<UserEntity, StoreError> {
        let query = format!(
            "INSERT INTO users (email, hash) VALUES ($1, $2) RETURNING {}",
            USER_COLUMNS
        );

        let result = sqlx::query_as::<_, UserEntity>(&query)
            .bind(&user.email)
            .bind(&user.hash)
            .fetch_one(&*self.db)
            .await;

        match result {
            Ok(created) => {
                tracing::info!("Created user: {}", created.id);
                Ok(created)
            }
            Err(e) => {
                tracing::debug!("Failed to create user: {:?}", e);
                Err(StoreError::from(e))
            }
        }
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserEntity>, StoreError> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);

        let user = sqlx::query_as::<_, UserEntity>(&query)
            .bind(email)
            .fetch_optional(&*self.db)
            .await?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: i32) -> Result<Option<UserEntity>, StoreError> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        let user = sqlx::query_as::<_, UserEntity>(&query)
            .bind(id)
            .fetch_optional(&*self.db)
            .await?;

        Ok(user)
    }

    async fn update_user(&self, id: i32, patch: UserPatch) -> Result<UserEntity, StoreError> {
        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(email) = patch.email {
            updates.push(format!("email = ${}", updates.len() + 1));
            params.push(email);
        }
        if let Some(first_name) = patch.first_name {
            updates.push(format!("first_name = ${}", updates.len() + 1));
            params.push(first_name);
        }
        if let Some(last_name) = patch.last_name {
            updates.push(format!("last_name = ${}", updates.len() + 1));
            params.push(last_name);
        }

        if updates.is_empty() {
            return self.find_user_by_id(id).await?.ok_or(StoreError::NotFound);
        }

        let query = format!(
            r#"
            UPDATE users
            SET {}, updated_at = NOW()
            WHERE id = ${}
            RETURNING {}
            "#,
            updates.join(", "),
            params.len() + 1,
            USER_COLUMNS
        );

        let mut query = sqlx::query_as::<_, UserEntity>(&query);
        for param in params {
            query = query.bind(param);
        }

        let user = query.bind(id).fetch_one(&*self.db).await?;
        Ok(user)
    }
}
