use axum::{
    Extension,
    extract::{Query, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    lesson::{entities::LessonWithProgress, ports::LessonService},
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
pub struct GetLessonsWithProgressResponse {
    pub data: Vec<LessonWithProgress>,
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "/with-progress",
    tag = "progress",
    summary = "Lessons with my progress",
    description = "Every lesson paired with the caller's progress. Lessons not started yet carry a `disabled` placeholder.",
    params(PaginationQuery),
    responses(
        (status = 200, body = GetLessonsWithProgressResponse)
    ),
)]
pub async fn get_lessons_with_progress(
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetLessonsWithProgressResponse>, ApiError> {
    let lessons = state
        .service
        .get_lessons_with_progress(identity, query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetLessonsWithProgressResponse {
        data: lessons.data,
        count: lessons.count,
    }))
}
