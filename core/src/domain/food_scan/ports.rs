use serde_json::Value;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        value_objects::{Paginated, Pagination},
    },
    food_scan::{entities::FoodScanResult, value_objects::AnalyzeFoodImageInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait FoodScanResultRepository: Send + Sync {
    fn fetch_food_scans_by_pet(
        &self,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<FoodScanResult>, CoreError>> + Send;

    fn get_food_scan_by_id(
        &self,
        result_id: Uuid,
    ) -> impl Future<Output = Result<Option<FoodScanResult>, CoreError>> + Send;

    fn create_food_scan(
        &self,
        result: FoodScanResult,
    ) -> impl Future<Output = Result<FoodScanResult, CoreError>> + Send;
}

pub trait FoodScanService: Send + Sync {
    fn get_pet_food_scans(
        &self,
        identity: Identity,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<FoodScanResult>, CoreError>> + Send;

    fn get_pet_food_scan(
        &self,
        identity: Identity,
        pet_id: Uuid,
        result_id: Uuid,
    ) -> impl Future<Output = Result<FoodScanResult, CoreError>> + Send;

    /// Runs the vision model on a food photo, stores the first detected item and
    /// returns the enriched analysis.
    fn analyze_food_image(
        &self,
        identity: Identity,
        input: AnalyzeFoodImageInput,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;
}
