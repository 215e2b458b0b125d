use serde::Deserialize;

use crate::database::UserPatch;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct EditUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl EditUserRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        match &self.email {
            Some(email) if !email.contains('@') => {
                Err(AppError::Validation("email must be a valid email".into()))
            }
            _ => Ok(()),
        }
    }
}

impl From<EditUserRequest> for UserPatch {
    fn from(req: EditUserRequest) -> Self {
        Self {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}
