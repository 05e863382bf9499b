use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            value_objects::{Paginated, Pagination},
        },
        reminder::{entities::Reminder, ports::ReminderRepository},
    },
    entity::{
        pets,
        reminders::{ActiveModel, Column, Entity, Relation},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresReminderRepository {
    pub db: DatabaseConnection,
}

impl PostgresReminderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn page(
        &self,
        query: Select<Entity>,
        pagination: Pagination,
    ) -> Result<Paginated<Reminder>, CoreError> {
        let (count, models) = futures::try_join!(
            query.clone().count(&self.db),
            query
                .order_by_asc(Column::CreatedAt)
                .offset(pagination.skip)
                .limit(pagination.limit)
                .all(&self.db),
        )
        .map_err(|e| {
            error!("Failed to list reminders: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Paginated::new(models.iter().map(Reminder::from).collect(), count))
    }
}

impl ReminderRepository for PostgresReminderRepository {
    async fn fetch_reminders_by_owner(
        &self,
        owner_id: Option<Uuid>,
        pagination: Pagination,
    ) -> Result<Paginated<Reminder>, CoreError> {
        let mut query = Entity::find();
        if let Some(owner_id) = owner_id {
            query = query
                .join(JoinType::InnerJoin, Relation::Pets.def())
                .filter(pets::Column::UserId.eq(owner_id));
        }

        self.page(query, pagination).await
    }

    async fn fetch_reminders_by_pet(
        &self,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<Reminder>, CoreError> {
        self.page(Entity::find().filter(Column::PetId.eq(pet_id)), pagination)
            .await
    }

    async fn get_reminder_by_id(&self, reminder_id: Uuid) -> Result<Option<Reminder>, CoreError> {
        let reminder = Entity::find_by_id(reminder_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get reminder by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(reminder.map(Reminder::from))
    }

    async fn create_reminder(&self, reminder: Reminder) -> Result<Reminder, CoreError> {
        let created = Entity::insert(ActiveModel::from(&reminder))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create reminder: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Reminder::from(created))
    }

    async fn update_reminder(&self, reminder: Reminder) -> Result<Reminder, CoreError> {
        let updated = ActiveModel::from(&reminder)
            .update(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update reminder {}: {}", reminder.id, e);
                CoreError::InternalServerError
            })?;

        Ok(Reminder::from(updated))
    }

    async fn delete_reminder(&self, reminder_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(reminder_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete reminder: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
