use axum::{Extension, extract::State};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    lesson::{entities::ProgressLesson, ports::LessonService},
};

use crate::application::http::{
    progress::validators::CreateProgressValidator,
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
    tag = "progress",
    summary = "Start a lesson",
    description = "Records the caller's progress on a lesson.",
    request_body = CreateProgressValidator,
    responses(
        (status = 201, body = ProgressLesson),
        (status = 404, description = "Lesson not found")
    ),
)]
pub async fn create_progress(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<CreateProgressValidator>,
) -> Result<Response<ProgressLesson>, ApiError> {
    let progress = state
        .service
        .create_progress(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(progress))
}
