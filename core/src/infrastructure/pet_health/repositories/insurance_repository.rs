use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pet_health::{entities::Insurance, ports::InsuranceRepository},
    },
    entity::insurances::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresInsuranceRepository {
    pub db: DatabaseConnection,
}

impl PostgresInsuranceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl InsuranceRepository for PostgresInsuranceRepository {
    /// The schema allows duplicates per pet, the oldest row is the singleton.
    async fn get_insurance_by_pet(&self, pet_id: Uuid) -> Result<Option<Insurance>, CoreError> {
        let insurance = Entity::find()
            .filter(Column::PetId.eq(pet_id))
            .order_by_asc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get insurance for pet {}: {}", pet_id, e);
                CoreError::InternalServerError
            })?;

        Ok(insurance.map(Insurance::from))
    }

    async fn create_insurance(&self, insurance: Insurance) -> Result<Insurance, CoreError> {
        let created = Entity::insert(ActiveModel::from(&insurance))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create insurance: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Insurance::from(created))
    }

    async fn update_insurance(&self, insurance: Insurance) -> Result<Insurance, CoreError> {
        let updated = ActiveModel::from(&insurance).update(&self.db).await.map_err(|e| {
            error!("Failed to update insurance {}: {}", insurance.id, e);
            CoreError::InternalServerError
        })?;

        Ok(Insurance::from(updated))
    }

    async fn delete_insurance(&self, insurance_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(insurance_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete insurance: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
