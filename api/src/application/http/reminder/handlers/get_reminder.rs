use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    reminder::{entities::Reminder, ports::ReminderService},
};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{reminder_id}",
    tag = "reminders",
    summary = "Get reminder",
    params(
        ("reminder_id" = Uuid, Path, description = "Reminder ID"),
    ),
    responses(
        (status = 200, body = Reminder),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "Reminder not found")
    ),
)]
pub async fn get_reminder(
    Path(reminder_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Reminder>, ApiError> {
    let reminder = state
        .service
        .get_reminder(identity, reminder_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(reminder))
}
