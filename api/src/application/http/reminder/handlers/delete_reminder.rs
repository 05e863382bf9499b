use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity, reminder::ports::ReminderService,
};
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
    path = "/{reminder_id}",
    tag = "reminders",
    summary = "Delete reminder",
    params(
        ("reminder_id" = Uuid, Path, description = "Reminder ID"),
    ),
    responses(
        (status = 200, body = Message),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "Reminder not found")
    ),
)]
pub async fn delete_reminder(
    Path(reminder_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Message>, ApiError> {
    state
        .service
        .delete_reminder(identity, reminder_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Message::new("Reminder deleted successfully")))
}
