use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    pet_health::{entities::MedicalCondition, ports::PetHealthService},
};
use uuid::Uuid;

use crate::application::http::{
    pet_health::validators::UpsertMedicalConditionValidator,
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
    path = "/{pet_id}/medical-condition",
    tag = "medical-condition",
    summary = "Get medical condition",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    responses(
        (status = 200, body = MedicalCondition),
        (status = 404, description = "Medical condition not found")
    ),
)]
pub async fn get_medical_condition(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<MedicalCondition>, ApiError> {
    let medical_condition = state
        .service
        .get_medical_condition(identity, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(medical_condition))
}

#[utoipa::path(
    put,
    path = "/{pet_id}/medical-condition",
    tag = "medical-condition",
    summary = "Create or update medical condition",
    description = "Merges the supplied fields into the pet's medical condition, creating it if needed.",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    request_body = UpsertMedicalConditionValidator,
    responses(
        (status = 200, body = MedicalCondition),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn upsert_medical_condition(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<UpsertMedicalConditionValidator>,
) -> Result<Response<MedicalCondition>, ApiError> {
    let medical_condition = state
        .service
        .upsert_medical_condition(identity, pet_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(medical_condition))
}

#[utoipa::path(
    delete,
    path = "/{pet_id}/medical-condition",
    tag = "medical-condition",
    summary = "Delete medical condition",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    responses(
        (status = 200, body = Message),
        (status = 404, description = "Medical condition not found")
    ),
)]
pub async fn delete_medical_condition(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Message>, ApiError> {
    state
        .service
        .delete_medical_condition(identity, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Message::new("Medical condition deleted successfully")))
}
