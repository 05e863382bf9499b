use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        value_objects::{Paginated, Pagination},
    },
    user::{
        entities::User,
        value_objects::{RegisterUserInput, UpdateProfileInput, UpdateUserInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_user_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_user_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn fetch_users(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<User>, CoreError>> + Send;

    fn update_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete_user(&self, user_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait UserService: Send + Sync {
    fn register_user(
        &self,
        input: RegisterUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_current_user(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_current_user(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete_current_user(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_users(
        &self,
        identity: Identity,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<User>, CoreError>> + Send;

    fn get_user(
        &self,
        identity: Identity,
        user_id: Uuid,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(
        &self,
        identity: Identity,
        user_id: Uuid,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete_user(
        &self,
        identity: Identity,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Creates the bootstrap superuser when no account uses that email yet.
    fn ensure_first_superuser(
        &self,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
