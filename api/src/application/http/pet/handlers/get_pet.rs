use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    pet::{entities::Pet, ports::PetService},
};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{pet_id}",
    tag = "pets",
    summary = "Get pet",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    responses(
        (status = 200, body = Pet),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn get_pet(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Pet>, ApiError> {
    let pet = state
        .service
        .get_pet(identity, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(pet))
}
