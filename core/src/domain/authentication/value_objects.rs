use uuid::Uuid;

use crate::domain::user::entities::User;

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    user: User,
}

impl Identity {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn id(&self) -> Uuid {
        self.user.id
    }

    pub fn is_superuser(&self) -> bool {
        self.user.is_superuser
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestInput {
    pub token: String,
}
