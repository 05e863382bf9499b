use axum::{
    Extension,
    extract::{Multipart, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    food_scan::{ports::FoodScanService, value_objects::AnalyzeFoodImageInput},
};
use serde_json::Value;
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    utils::validators::{AnalyzeFoodImageForm, parse_form_bool},
};

#[utoipa::path(
    post,
    path = "/analyze-food-image",
    tag = "utils",
    summary = "Analyze food image",
    description = "Runs the vision model on a food photo, stores the first detected item as a food scan of the pet and returns the full analysis.",
    request_body(content = AnalyzeFoodImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Model analysis enriched with `hasMultipleItems` and `nutritionHealthScore`", body = Object),
        (status = 400, description = "Invalid upload or not enough permissions"),
        (status = 404, description = "Pet not found"),
        (status = 502, description = "The model failed or returned unparsable output")
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    mut multipart: Multipart,
) -> Result<Response<Value>, ApiError> {
    let mut image: Option<Vec<u8>> = None;
    let mut pet_id: Option<Uuid> = None;
    let mut include_portion_estimates = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
                image = Some(data.to_vec());
            }
            "pet_id" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read pet_id: {}", e)))?;
                pet_id = Some(
                    Uuid::parse_str(value.trim())
                        .map_err(|_| ApiError::BadRequest("Invalid pet_id format".to_string()))?,
                );
            }
            "include_portion_estimates" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read include_portion_estimates: {}", e))
                })?;
                include_portion_estimates = parse_form_bool("include_portion_estimates", &value)?;
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;
    let pet_id = pet_id.ok_or_else(|| ApiError::BadRequest("Missing pet_id field".to_string()))?;

    let analysis = state
        .service
        .analyze_food_image(
            identity,
            AnalyzeFoodImageInput {
                pet_id,
                image,
                include_portion_estimates,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analysis))
}
