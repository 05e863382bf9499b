use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    reminder::{entities::Reminder, ports::ReminderService},
};
use uuid::Uuid;

use crate::application::http::{
    reminder::validators::UpdateReminderValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    patch,
    path = "/{reminder_id}",
    tag = "reminders",
    summary = "Update reminder",
    params(
        ("reminder_id" = Uuid, Path, description = "Reminder ID"),
    ),
    request_body = UpdateReminderValidator,
    responses(
        (status = 200, body = Reminder),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "Reminder not found")
    ),
)]
pub async fn update_reminder(
    Path(reminder_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<UpdateReminderValidator>,
) -> Result<Response<Reminder>, ApiError> {
    let reminder = state
        .service
        .update_reminder(identity, reminder_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(reminder))
}
