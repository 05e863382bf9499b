use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{authentication::value_objects::Identity, pet::ports::PetService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{Message, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{pet_id}",
    tag = "pets",
    summary = "Delete pet",
    description = "Deletes a pet together with its health records, reminders and food scans.",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
    ),
    responses(
        (status = 200, body = Message),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn delete_pet(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Message>, ApiError> {
    state
        .service
        .delete_pet(identity, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Message::new("Pet deleted successfully")))
}
