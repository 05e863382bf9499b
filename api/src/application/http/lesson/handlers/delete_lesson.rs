use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{authentication::value_objects::Identity, lesson::ports::LessonService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{lesson_id}",
    tag = "lessons",
    summary = "Delete lesson",
    params(
        ("lesson_id" = Uuid, Path, description = "Lesson ID"),
    ),
    responses(
        (status = 204, description = "Lesson deleted"),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "Lesson not found")
    ),
)]
pub async fn delete_lesson(
    Path(lesson_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_lesson(identity, lesson_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
