use axum::{
    Extension,
    extract::{Path, Query, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    food_scan::{entities::FoodScanResult, ports::FoodScanService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    query_params::PaginationQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFoodScanResultsResponse {
    pub data: Vec<FoodScanResult>,
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "/{pet_id}",
    tag = "food-scan-results",
    summary = "List a pet's food scans",
    description = "Newest first.",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        PaginationQuery
    ),
    responses(
        (status = 200, body = GetFoodScanResultsResponse),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn get_pet_food_scans(
    Path(pet_id): Path<Uuid>,
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetFoodScanResultsResponse>, ApiError> {
    let results = state
        .service
        .get_pet_food_scans(identity, pet_id, query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFoodScanResultsResponse {
        data: results.data,
        count: results.count,
    }))
}
