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
        pet::{entities::Pet, ports::PetRepository},
    },
    entity::pets::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresPetRepository {
    pub db: DatabaseConnection,
}

impl PostgresPetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PetRepository for PostgresPetRepository {
    async fn fetch_pets(
        &self,
        owner_id: Option<Uuid>,
        pagination: Pagination,
    ) -> Result<Paginated<Pet>, CoreError> {
        let mut query = Entity::find();
        if let Some(owner_id) = owner_id {
            query = query.filter(Column::UserId.eq(owner_id));
        }

        let (count, models) = futures::try_join!(
            query.clone().count(&self.db),
            query
                .order_by_asc(Column::CreatedAt)
                .offset(pagination.skip)
                .limit(pagination.limit)
                .all(&self.db),
        )
        .map_err(|e| {
            error!("Failed to list pets: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Paginated::new(models.iter().map(Pet::from).collect(), count))
    }

    async fn get_pet_by_id(&self, pet_id: Uuid) -> Result<Option<Pet>, CoreError> {
        let pet = Entity::find_by_id(pet_id).one(&self.db).await.map_err(|e| {
            error!("Failed to get pet by id: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(pet.map(Pet::from))
    }

    async fn create_pet(&self, pet: Pet) -> Result<Pet, CoreError> {
        let created = Entity::insert(ActiveModel::from(&pet))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create pet: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Pet::from(created))
    }

    async fn update_pet(&self, pet: Pet) -> Result<Pet, CoreError> {
        let updated = ActiveModel::from(&pet).update(&self.db).await.map_err(|e| {
            error!("Failed to update pet {}: {}", pet.id, e);
            CoreError::InternalServerError
        })?;

        Ok(Pet::from(updated))
    }

    async fn delete_pet(&self, pet_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(pet_id).exec(&self.db).await.map_err(|e| {
            error!("Failed to delete pet: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }
}
