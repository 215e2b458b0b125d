use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

impl AuthRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(AppError::Validation("email must be a valid email".into()));
        }
        if self.password.is_empty() {
            return Err(AppError::Validation("password should not be empty".into()));
        }
        Ok(())
    }
}
