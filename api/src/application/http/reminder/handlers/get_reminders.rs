use axum::{
    Extension,
    extract::{Query, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    reminder::{entities::Reminder, ports::ReminderService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    query_params::PaginationQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRemindersResponse {
    pub data: Vec<Reminder>,
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "reminders",
    summary = "List reminders",
    description = "Lists the reminders of every pet the caller owns.",
    params(PaginationQuery),
    responses(
        (status = 200, body = GetRemindersResponse)
    ),
)]
pub async fn get_reminders(
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetRemindersResponse>, ApiError> {
    let reminders = state
        .service
        .get_reminders(identity, query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRemindersResponse {
        data: reminders.data,
        count: reminders.count,
    }))
}
