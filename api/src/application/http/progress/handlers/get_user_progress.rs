use axum::{
    Extension,
    extract::{Path, Query, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    lesson::{entities::ProgressLesson, ports::LessonService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    query_params::PaginationQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProgressResponse {
    pub data: Vec<ProgressLesson>,
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "/user/{user_id}",
    tag = "progress",
    summary = "List a user's progress",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        PaginationQuery,
    ),
    responses(
        (status = 200, body = GetProgressResponse),
        (status = 400, description = "Not enough permissions")
    ),
)]
pub async fn get_user_progress(
    Path(user_id): Path<Uuid>,
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetProgressResponse>, ApiError> {
    let progress = state
        .service
        .get_user_progress(identity, user_id, query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProgressResponse {
        data: progress.data,
        count: progress.count,
    }))
}
