use axum::{
    Extension,
    extract::{Path, Query, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    pet_health::{entities::Allergy, ports::PetHealthService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    pet_health::validators::{CreateAllergyValidator, UpdateAllergyValidator},
    query_params::PaginationQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{Message, Response},
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAllergiesResponse {
    pub data: Vec<Allergy>,
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "/{pet_id}/allergies",
    tag = "allergies",
    summary = "List allergies",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        PaginationQuery
    ),
    responses(
        (status = 200, body = GetAllergiesResponse),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn get_allergies(
    Path(pet_id): Path<Uuid>,
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetAllergiesResponse>, ApiError> {
    let allergies = state
        .service
        .get_allergies(identity, pet_id, query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAllergiesResponse {
        data: allergies.data,
        count: allergies.count,
    }))
}

#[utoipa::path(
    get,
    path = "/{pet_id}/allergies/{allergy_id}",
    tag = "allergies",
    summary = "Get allergy",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("allergy_id" = Uuid, Path, description = "Allergy ID"),
    ),
    responses(
        (status = 200, body = Allergy),
        (status = 404, description = "Allergy not found")
    ),
)]
pub async fn get_allergy(
    Path((pet_id, allergy_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Allergy>, ApiError> {
    let allergy = state
        .service
        .get_allergy(identity, pet_id, allergy_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(allergy))
}

#[utoipa::path(
    post,
    path = "/{pet_id}/allergies",
    tag = "allergies",
    summary = "Create allergy",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    request_body = CreateAllergyValidator,
    responses(
        (status = 201, body = Allergy),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn create_allergy(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<CreateAllergyValidator>,
) -> Result<Response<Allergy>, ApiError> {
    let allergy = state
        .service
        .create_allergy(identity, pet_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(allergy))
}

#[utoipa::path(
    put,
    path = "/{pet_id}/allergies/{allergy_id}",
    tag = "allergies",
    summary = "Update allergy",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("allergy_id" = Uuid, Path, description = "Allergy ID"),
    ),
    request_body = UpdateAllergyValidator,
    responses(
        (status = 200, body = Allergy),
        (status = 404, description = "Allergy not found")
    ),
)]
pub async fn update_allergy(
    Path((pet_id, allergy_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<UpdateAllergyValidator>,
) -> Result<Response<Allergy>, ApiError> {
    let allergy = state
        .service
        .update_allergy(identity, pet_id, allergy_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(allergy))
}

#[utoipa::path(
    delete,
    path = "/{pet_id}/allergies/{allergy_id}",
    tag = "allergies",
    summary = "Delete allergy",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("allergy_id" = Uuid, Path, description = "Allergy ID"),
    ),
    responses(
        (status = 200, body = Message),
        (status = 404, description = "Allergy not found")
    ),
)]
pub async fn delete_allergy(
    Path((pet_id, allergy_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Message>, ApiError> {
    state
        .service
        .delete_allergy(identity, pet_id, allergy_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Message::new("Allergy deleted successfully")))
}
