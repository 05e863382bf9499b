use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    lesson::{entities::Lesson, ports::LessonService},
};
use uuid::Uuid;

use crate::application::http::{
    lesson::validators::UpdateLessonValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/{lesson_id}",
    tag = "lessons",
    summary = "Update lesson",
    description = "Only the author of a lesson, or a superuser, may edit it.",
    params(
        ("lesson_id" = Uuid, Path, description = "Lesson ID"),
    ),
    request_body = UpdateLessonValidator,
    responses(
        (status = 200, body = Lesson),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "Lesson not found")
    ),
)]
pub async fn update_lesson(
    Path(lesson_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<UpdateLessonValidator>,
) -> Result<Response<Lesson>, ApiError> {
    let lesson = state
        .service
        .update_lesson(identity, lesson_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(lesson))
}
