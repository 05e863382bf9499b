use axum::{
    Extension,
    extract::{Query, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    reminder::{entities::Reminder, ports::ReminderService},
};

use crate::application::http::{
    reminder::validators::{CreateReminderQuery, CreateReminderValidator},
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
    tag = "reminders",
    summary = "Create reminder",
    description = "Creates a reminder for the pet given in the `pet_id` query parameter.",
    params(CreateReminderQuery),
    request_body = CreateReminderValidator,
    responses(
        (status = 201, body = Reminder),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn create_reminder(
    Query(query): Query<CreateReminderQuery>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<CreateReminderValidator>,
) -> Result<Response<Reminder>, ApiError> {
    let reminder = state
        .service
        .create_reminder(identity, query.pet_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(reminder))
}
