use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    food_scan::{entities::FoodScanResult, ports::FoodScanService},
};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{pet_id}/{result_id}",
    tag = "food-scan-results",
    summary = "Get food scan",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("result_id" = Uuid, Path, description = "Food scan result ID"),
    ),
    responses(
        (status = 200, body = FoodScanResult),
        (status = 404, description = "Food scan result not found")
    ),
)]
pub async fn get_pet_food_scan(
    Path((pet_id, result_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<FoodScanResult>, ApiError> {
    let result = state
        .service
        .get_pet_food_scan(identity, pet_id, result_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
