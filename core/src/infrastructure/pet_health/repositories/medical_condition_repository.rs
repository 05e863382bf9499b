use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pet_health::{entities::MedicalCondition, ports::MedicalConditionRepository},
    },
    entity::medical_conditions::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresMedicalConditionRepository {
    pub db: DatabaseConnection,
}

impl PostgresMedicalConditionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MedicalConditionRepository for PostgresMedicalConditionRepository {
    async fn get_medical_condition_by_pet(&self, pet_id: Uuid) -> Result<Option<MedicalCondition>, CoreError> {
        let condition = Entity::find()
            .filter(Column::PetId.eq(pet_id))
            .order_by_asc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get medical condition for pet {}: {}", pet_id, e);
                CoreError::InternalServerError
            })?;

        Ok(condition.map(MedicalCondition::from))
    }

    async fn create_medical_condition(&self, condition: MedicalCondition) -> Result<MedicalCondition, CoreError> {
        let created = Entity::insert(ActiveModel::from(&condition))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create medical condition: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(MedicalCondition::from(created))
    }

    async fn update_medical_condition(&self, condition: MedicalCondition) -> Result<MedicalCondition, CoreError> {
        let updated = ActiveModel::from(&condition).update(&self.db).await.map_err(|e| {
            error!("Failed to update medical condition {}: {}", condition.id, e);
            CoreError::InternalServerError
        })?;

        Ok(MedicalCondition::from(updated))
    }

    async fn delete_medical_condition(&self, condition_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(condition_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete medical condition: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
