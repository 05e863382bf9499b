use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// OAuth2 password-grant form; `username` carries the email.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
