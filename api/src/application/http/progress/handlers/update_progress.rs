use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    lesson::{entities::ProgressLesson, ports::LessonService},
};
use uuid::Uuid;

use crate::application::http::{
    progress::validators::UpdateProgressValidator,
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
    path = "/{progress_id}",
    tag = "progress",
    summary = "Update progress",
    params(
        ("progress_id" = Uuid, Path, description = "Progress ID"),
    ),
    request_body = UpdateProgressValidator,
    responses(
        (status = 200, body = ProgressLesson),
        (status = 400, description = "Not enough permissions"),
        (status = 404, description = "Progress not found")
    ),
)]
pub async fn update_progress(
    Path(progress_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<UpdateProgressValidator>,
) -> Result<Response<ProgressLesson>, ApiError> {
    let progress = state
        .service
        .update_progress(identity, progress_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(progress))
}
