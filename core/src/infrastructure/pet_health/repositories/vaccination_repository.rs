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
        pet_health::{entities::Vaccination, ports::VaccinationRepository},
    },
    entity::vaccinations::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresVaccinationRepository {
    pub db: DatabaseConnection,
}

impl PostgresVaccinationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl VaccinationRepository for PostgresVaccinationRepository {
    async fn fetch_vaccinations(
        &self,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<Vaccination>, CoreError> {
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
            error!("Failed to list vaccinations: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Paginated::new(models.iter().map(Vaccination::from).collect(), count))
    }

    async fn get_vaccination_by_id(&self, vaccination_id: Uuid) -> Result<Option<Vaccination>, CoreError> {
        let vaccination = Entity::find_by_id(vaccination_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get vaccination by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(vaccination.map(Vaccination::from))
    }

    async fn create_vaccination(&self, vaccination: Vaccination) -> Result<Vaccination, CoreError> {
        let created = Entity::insert(ActiveModel::from(&vaccination))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create vaccination: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Vaccination::from(created))
    }

    async fn update_vaccination(&self, vaccination: Vaccination) -> Result<Vaccination, CoreError> {
        let updated = ActiveModel::from(&vaccination).update(&self.db).await.map_err(|e| {
            error!("Failed to update vaccination {}: {}", vaccination.id, e);
            CoreError::InternalServerError
        })?;

        Ok(Vaccination::from(updated))
    }

    async fn delete_vaccination(&self, vaccination_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(vaccination_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete vaccination: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
