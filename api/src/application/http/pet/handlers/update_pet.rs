use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    pet::{entities::Pet, ports::PetService},
};
use uuid::Uuid;

use crate::application::http::{
    pet::validators::UpdatePetValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/{pet_id}",
    tag = "pets",
    summary = "Update pet",
    description = "Updates only the supplied fields; `null` clears a field.",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    request_body = UpdatePetValidator,
    responses(
        (status = 200, body = Pet),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn update_pet(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<UpdatePetValidator>,
) -> Result<Response<Pet>, ApiError> {
    let pet = state
        .service
        .update_pet(identity, pet_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(pet))
}
