use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            value_objects::{Paginated, Pagination},
        },
        user::{entities::User, ports::UserRepository},
    },
    entity::users::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        let created = Entity::insert(ActiveModel::from(&user))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(User::from(created))
    }

    async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn get_user_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn fetch_users(&self, pagination: Pagination) -> Result<Paginated<User>, CoreError> {
        let query = Entity::find();

        let (count, models) = futures::try_join!(
            query.clone().count(&self.db),
            query
                .order_by_asc(Column::CreatedAt)
                .offset(pagination.skip)
                .limit(pagination.limit)
                .all(&self.db),
        )
        .map_err(|e| {
            error!("Failed to list users: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Paginated::new(models.iter().map(User::from).collect(), count))
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        let updated = ActiveModel::from(&user).update(&self.db).await.map_err(|e| {
            error!("Failed to update user {}: {}", user.id, e);
            CoreError::InternalServerError
        })?;

        Ok(User::from(updated))
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
