use axum::{Extension, extract::State};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    pet::{entities::Pet, ports::PetService},
};

use crate::application::http::{
    pet::validators::CreatePetValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "pets",
    summary = "Create pet",
    description = "Creates a pet owned by the caller.",
    request_body = CreatePetValidator,
    responses(
        (status = 201, body = Pet)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<CreatePetValidator>,
) -> Result<Response<Pet>, ApiError> {
    let pet = state
        .service
        .create_pet(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(pet))
}
