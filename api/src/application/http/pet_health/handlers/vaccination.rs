use axum::{
    Extension,
    extract::{Path, Query, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    pet_health::{entities::Vaccination, ports::PetHealthService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    pet_health::validators::{CreateVaccinationValidator, UpdateVaccinationValidator},
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
pub struct GetVaccinationsResponse {
    pub data: Vec<Vaccination>,
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "/{pet_id}/vaccinations",
    tag = "vaccinations",
    summary = "List vaccinations",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        PaginationQuery
    ),
    responses(
        (status = 200, body = GetVaccinationsResponse),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn get_vaccinations(
    Path(pet_id): Path<Uuid>,
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetVaccinationsResponse>, ApiError> {
    let vaccinations = state
        .service
        .get_vaccinations(identity, pet_id, query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetVaccinationsResponse {
        data: vaccinations.data,
        count: vaccinations.count,
    }))
}

#[utoipa::path(
    get,
    path = "/{pet_id}/vaccinations/{vaccination_id}",
    tag = "vaccinations",
    summary = "Get vaccination",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("vaccination_id" = Uuid, Path, description = "Vaccination ID"),
    ),
    responses(
        (status = 200, body = Vaccination),
        (status = 404, description = "Vaccination not found")
    ),
)]
pub async fn get_vaccination(
    Path((pet_id, vaccination_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Vaccination>, ApiError> {
    let vaccination = state
        .service
        .get_vaccination(identity, pet_id, vaccination_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(vaccination))
}

#[utoipa::path(
    post,
    path = "/{pet_id}/vaccinations",
    tag = "vaccinations",
    summary = "Create vaccination",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    request_body = CreateVaccinationValidator,
    responses(
        (status = 201, body = Vaccination),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn create_vaccination(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<CreateVaccinationValidator>,
) -> Result<Response<Vaccination>, ApiError> {
    let vaccination = state
        .service
        .create_vaccination(identity, pet_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(vaccination))
}

#[utoipa::path(
    put,
    path = "/{pet_id}/vaccinations/{vaccination_id}",
    tag = "vaccinations",
    summary = "Update vaccination",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("vaccination_id" = Uuid, Path, description = "Vaccination ID"),
    ),
    request_body = UpdateVaccinationValidator,
    responses(
        (status = 200, body = Vaccination),
        (status = 404, description = "Vaccination not found")
    ),
)]
pub async fn update_vaccination(
    Path((pet_id, vaccination_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<UpdateVaccinationValidator>,
) -> Result<Response<Vaccination>, ApiError> {
    let vaccination = state
        .service
        .update_vaccination(identity, pet_id, vaccination_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(vaccination))
}

#[utoipa::path(
    delete,
    path = "/{pet_id}/vaccinations/{vaccination_id}",
    tag = "vaccinations",
    summary = "Delete vaccination",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("vaccination_id" = Uuid, Path, description = "Vaccination ID"),
    ),
    responses(
        (status = 200, body = Message),
        (status = 404, description = "Vaccination not found")
    ),
)]
pub async fn delete_vaccination(
    Path((pet_id, vaccination_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Message>, ApiError> {
    state
        .service
        .delete_vaccination(identity, pet_id, vaccination_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Message::new("Vaccination deleted successfully")))
}
