use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::entities::{AccessToken, JwtClaim},
};

#[cfg_attr(test, mockall::automock)]
pub trait TokenRepository: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid) -> Result<AccessToken, CoreError>;

    fn verify_access_token(&self, token: &str) -> Result<JwtClaim, CoreError>;
}
