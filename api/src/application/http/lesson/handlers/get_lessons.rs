use axum::{
    Extension,
    extract::{Query, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    lesson::{entities::Lesson, ports::LessonService},
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
pub struct GetLessonsResponse {
    pub data: Vec<Lesson>,
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "lessons",
    summary = "List lessons",
    description = "Lessons form a shared catalogue readable by every user.",
    params(PaginationQuery),
    responses(
        (status = 200, body = GetLessonsResponse)
    ),
)]
pub async fn get_lessons(
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetLessonsResponse>, ApiError> {
    let lessons = state
        .service
        .get_lessons(identity, query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetLessonsResponse {
        data: lessons.data,
        count: lessons.count,
    }))
}
