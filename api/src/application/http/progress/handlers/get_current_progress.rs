use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    lesson::{entities::ProgressWithLesson, ports::LessonService},
};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/user/{user_id}/current",
    tag = "progress",
    summary = "Current lesson",
    description = "The most recently updated progress of the user, with its lesson.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = ProgressWithLesson),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "No progress recorded")
    ),
)]
pub async fn get_current_progress(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<ProgressWithLesson>, ApiError> {
    let current = state
        .service
        .get_current_progress(identity, user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(current))
}
