use axum::{
    Extension,
    extract::{Path, Query, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity, reminder::ports::ReminderService,
};
use uuid::Uuid;

use crate::application::http::{
    query_params::PaginationQuery,
    reminder::handlers::get_reminders::GetRemindersResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/pet/{pet_id}",
    tag = "reminders",
    summary = "List a pet's reminders",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        PaginationQuery
    ),
    responses(
        (status = 200, body = GetRemindersResponse),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "Pet not found")
    ),
)]
pub async fn get_pet_reminders(
    Path(pet_id): Path<Uuid>,
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetRemindersResponse>, ApiError> {
    let reminders = state
        .service
        .get_pet_reminders(identity, pet_id, query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRemindersResponse {
        data: reminders.data,
        count: reminders.count,
    }))
}
