use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    pet_health::{entities::Medication, ports::PetHealthService},
};
use uuid::Uuid;

use crate::application::http::{
    pet_health::validators::UpsertMedicationValidator,
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
    path = "/{pet_id}/medication",
    tag = "medication",
    summary = "Get medication",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    responses(
        (status = 200, body = Medication),
        (status = 404, description = "Medication not found")
    ),
)]
pub async fn get_medication(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Medication>, ApiError> {
    let medication = state
        .service
        .get_medication(identity, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(medication))
}

#[utoipa::path(
    put,
    path = "/{pet_id}/medication",
    tag = "medication",
    summary = "Create or update medication",
    description = "Merges the supplied fields into the pet's medication, creating it if needed.",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    request_body = UpsertMedicationValidator,
    responses(
        (status = 200, body = Medication),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn upsert_medication(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<UpsertMedicationValidator>,
) -> Result<Response<Medication>, ApiError> {
    let medication = state
        .service
        .upsert_medication(identity, pet_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(medication))
}

#[utoipa::path(
    delete,
    path = "/{pet_id}/medication",
    tag = "medication",
    summary = "Delete medication",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    responses(
        (status = 200, body = Message),
        (status = 404, description = "Medication not found")
    ),
)]
pub async fn delete_medication(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Message>, ApiError> {
    state
        .service
        .delete_medication(identity, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Message::new("Medication deleted successfully")))
}
