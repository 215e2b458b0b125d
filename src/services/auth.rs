use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Config;
use crate::database::error::StoreError;
use crate::database::models::user::NewUser;
use crate::database::store::UserStore;
use crate::error::AppError;
use crate::utils::{generate_token, hash_password, verify_password};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}

/// 注册与登录，本身不持有状态，也不做缓存
pub struct AuthService {
    users: Arc<dyn UserStore>,
    config: Config,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, config: Config) -> Self {
        Self { users, config }
    }

    pub async fn signup(&self, email: &str, password: &str) -> Result<AccessToken, AppError> {
        let hash = hash_password(password, self.config.bcrypt_cost)?;

        let user = match self
            .users
            .create_user(NewUser {
                email: email.to_string(),
                hash,
            })
            .await
        {
            Ok(user) => user,
            Err(StoreError::UniqueViolation(constraint)) => {
                tracing::info!("Signup rejected, {} already taken", constraint);
                return Err(AppError::CredentialsTaken);
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!("User {} signed up", user.id);
        self.issue_token(user.id, &user.email)
    }

    /// 邮箱不存在与密码错误返回同一个错误
    pub async fn signin(&self, email: &str, password: &str) -> Result<AccessToken, AppError> {
        let user = self
            .users
            .find_user_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &user.hash)? {
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!("User {} signed in", user.id);
        self.issue_token(user.id, &user.email)
    }

    pub fn issue_token(&self, user_id: i32, email: &str) -> Result<AccessToken, AppError> {
        let (access_token, _expires_at) = generate_token(user_id, email, &self.config)?;
        Ok(AccessToken { access_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::InMemoryStore;
    use crate::database::store::MockUserStore;
    use crate::utils::tests::test_config;
    use crate::utils::verify_token;
    use rstest::rstest;

    fn service(users: Arc<dyn UserStore>) -> AuthService {
        AuthService::new(users, test_config())
    }

    #[tokio::test]
    async fn signup_issues_token_for_new_user() {
        let store = Arc::new(InMemoryStore::new());
        let service = service(store.clone());

        let token = service.signup("test@gmail.com", "123").await.unwrap();

        let created = store
            .find_user_by_email("test@gmail.com")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(created.hash, "123");
        let claims = verify_token(&token.access_token, &test_config()).unwrap();
        assert_eq!(claims.sub, created.id);
        assert_eq!(claims.email, "test@gmail.com");
    }

    #[rstest]
    #[case("123")]
    #[case("a completely different password")]
    #[tokio::test]
    async fn signup_with_taken_email_fails(#[case] password: &str) {
        let service = service(Arc::new(InMemoryStore::new()));
        service.signup("test@gmail.com", "123").await.unwrap();

        let err = service.signup("test@gmail.com", password).await.unwrap_err();
        assert!(matches!(err, AppError::CredentialsTaken));
    }

    #[tokio::test]
    async fn signup_rethrows_other_store_errors() {
        let mut users = MockUserStore::new();
        users
            .expect_create_user()
            .times(1)
            .returning(|_| Err(StoreError::Backend("Some unexpected error".into())));
        let service = service(Arc::new(users));

        let err = service.signup("test@gmail.com", "123").await.unwrap_err();
        assert!(
            matches!(err, AppError::Store(StoreError::Backend(ref m)) if m == "Some unexpected error")
        );
    }

    #[tokio::test]
    async fn signin_returns_token_for_existing_user() {
        let store = Arc::new(InMemoryStore::new());
        let service = service(store.clone());
        service.signup("test@gmail.com", "123").await.unwrap();

        let token = service.signin("test@gmail.com", "123").await.unwrap();

        let user = store
            .find_user_by_email("test@gmail.com")
            .await
            .unwrap()
            .unwrap();
        let claims = verify_token(&token.access_token, &test_config()).unwrap();
        assert_eq!(claims.sub, user.id);
    }

    #[rstest]
    #[case("test@gmail.com", "wrong")]
    #[case("nobody@gmail.com", "123")]
    #[tokio::test]
    async fn signin_failures_are_indistinguishable(#[case] email: &str, #[case] password: &str) {
        let service = service(Arc::new(InMemoryStore::new()));
        service.signup("test@gmail.com", "123").await.unwrap();

        let err = service.signin(email, password).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(err.to_string(), "Credentials incorrect");
    }

    #[test]
    fn issued_token_has_configured_expiry() {
        let service = service(Arc::new(InMemoryStore::new()));

        let token = service.issue_token(1, "test@gmail.com").unwrap();

        let claims = verify_token(&token.access_token, &test_config()).unwrap();
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }
}
