use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    pet_health::{entities::Insurance, ports::PetHealthService},
};
use uuid::Uuid;

use crate::application::http::{
    pet_health::validators::UpsertInsuranceValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{Message, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{pet_id}/insurance",
    tag = "insurance",
    summary = "Get insurance",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    responses(
        (status = 200, body = Insurance),
        (status = 404, description = "Insurance not found")
    ),
)]
pub async fn get_insurance(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Insurance>, ApiError> {
    let insurance = state
        .service
        .get_insurance(identity, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(insurance))
}

#[utoipa::path(
    put,
    path = "/{pet_id}/insurance",
    tag = "insurance",
    summary = "Create or update insurance",
    description = "Merges the supplied fields into the pet's insurance, creating it if needed.",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    request_body = UpsertInsuranceValidator,
    responses(
        (status = 200, body = Insurance),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn upsert_insurance(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<UpsertInsuranceValidator>,
) -> Result<Response<Insurance>, ApiError> {
    let insurance = state
        .service
        .upsert_insurance(identity, pet_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(insurance))
}

#[utoipa::path(
    delete,
    path = "/{pet_id}/insurance",
    tag = "insurance",
    summary = "Delete insurance",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    responses(
        (status = 200, body = Message),
        (status = 404, description = "Insurance not found")
    ),
)]
pub async fn delete_insurance(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Message>, ApiError> {
    state
        .service
        .delete_insurance(identity, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Message::new("Insurance deleted successfully")))
}
