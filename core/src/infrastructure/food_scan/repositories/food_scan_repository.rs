use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            value_objects::{Paginated, Pagination},
        },
        food_scan::{entities::FoodScanResult, ports::FoodScanResultRepository},
    },
    entity::food_scan_results::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFoodScanResultRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodScanResultRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FoodScanResultRepository for PostgresFoodScanResultRepository {
    async fn fetch_food_scans_by_pet(
        &self,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<FoodScanResult>, CoreError> {
        let query = Entity::find().filter(Column::PetId.eq(pet_id));

        let (count, models) = futures::try_join!(
            query.clone().count(&self.db),
            query
                .order_by_desc(Column::CreatedAt)
                .offset(pagination.skip)
                .limit(pagination.limit)
                .all(&self.db),
        )
        .map_err(|e| {
            error!("Failed to list food scan results: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Paginated::new(
            models.iter().map(FoodScanResult::from).collect(),
            count,
        ))
    }

    async fn get_food_scan_by_id(&self, result_id: Uuid) -> Result<Option<FoodScanResult>, CoreError> {
        let model = Entity::find_by_id(result_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food scan result by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(FoodScanResult::from))
    }

    async fn create_food_scan(&self, result: FoodScanResult) -> Result<FoodScanResult, CoreError> {
        let created = Entity::insert(ActiveModel::from(&result))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to store food scan result: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FoodScanResult::from(created))
    }
}
