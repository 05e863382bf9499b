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
        pet_health::{entities::Allergy, ports::AllergyRepository},
    },
    entity::allergies::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresAllergyRepository {
    pub db: DatabaseConnection,
}

impl PostgresAllergyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AllergyRepository for PostgresAllergyRepository {
    async fn fetch_allergies(
        &self,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<Allergy>, CoreError> {
        let query = Entity::find().filter(Column::PetId.eq(pet_id));

        let (count, models) = futures::try_join!(
            query.clone().count(&self.db),
            query
                .order_by_asc(Column::CreatedAt)
                .offset(pagination.skip)
                .limit(pagination.limit)
                .all(&self.db),
        )
        .map_err(|e| {
            error!("Failed to list allergies: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Paginated::new(models.iter().map(Allergy::from).collect(), count))
    }

    async fn get_allergy_by_id(&self, allergy_id: Uuid) -> Result<Option<Allergy>, CoreError> {
        let allergy = Entity::find_by_id(allergy_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get allergy by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(allergy.map(Allergy::from))
    }

    async fn create_allergy(&self, allergy: Allergy) -> Result<Allergy, CoreError> {
        let created = Entity::insert(ActiveModel::from(&allergy))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create allergy: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Allergy::from(created))
    }

    async fn update_allergy(&self, allergy: Allergy) -> Result<Allergy, CoreError> {
        let updated = ActiveModel::from(&allergy).update(&self.db).await.map_err(|e| {
            error!("Failed to update allergy {}: {}", allergy.id, e);
            CoreError::InternalServerError
        })?;

        Ok(Allergy::from(updated))
    }

    async fn delete_allergy(&self, allergy_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(allergy_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete allergy: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
