use axum::{Extension, extract::State};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    lesson::{entities::Lesson, ports::LessonService},
};

use crate::application::http::{
    lesson::validators::CreateLessonValidator,
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
    tag = "lessons",
    summary = "Create lesson",
    request_body = CreateLessonValidator,
    responses(
        (status = 201, body = Lesson),
        (status = 400, description = "Invalid payload")
    ),
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<CreateLessonValidator>,
) -> Result<Response<Lesson>, ApiError> {
    let lesson = state
        .service
        .create_lesson(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(lesson))
}
