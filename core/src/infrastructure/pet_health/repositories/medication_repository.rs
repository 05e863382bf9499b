use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pet_health::{entities::Medication, ports::MedicationRepository},
    },
    entity::medications::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresMedicationRepository {
    pub db: DatabaseConnection,
}

impl PostgresMedicationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MedicationRepository for PostgresMedicationRepository {
    async fn get_medication_by_pet(&self, pet_id: Uuid) -> Result<Option<Medication>, CoreError> {
        let medication = Entity::find()
            .filter(Column::PetId.eq(pet_id))
            .order_by_asc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get medication for pet {}: {}", pet_id, e);
                CoreError::InternalServerError
            })?;

        Ok(medication.map(Medication::from))
    }

    async fn create_medication(&self, medication: Medication) -> Result<Medication, CoreError> {
        let created = Entity::insert(ActiveModel::from(&medication))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create medication: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Medication::from(created))
    }

    async fn update_medication(&self, medication: Medication) -> Result<Medication, CoreError> {
        let updated = ActiveModel::from(&medication).update(&self.db).await.map_err(|e| {
            error!("Failed to update medication {}: {}", medication.id, e);
            CoreError::InternalServerError
        })?;

        Ok(Medication::from(updated))
    }

    async fn delete_medication(&self, medication_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(medication_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete medication: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
