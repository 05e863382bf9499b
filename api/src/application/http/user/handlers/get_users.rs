use axum::{
    Extension,
    extract::{Query, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    user::{entities::User, ports::UserService},
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
pub struct GetUsersResponse {
    pub data: Vec<User>,
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "users",
    summary = "List users",
    description = "Lists every account. Superuser only.",
    params(PaginationQuery),
    responses(
        (status = 200, body = GetUsersResponse),
        (status = 403, description = "The user doesn't have enough privileges")
    ),
)]
pub async fn get_users(
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<GetUsersResponse>, ApiError> {
    let users = state
        .service
        .get_users(identity, query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUsersResponse {
        data: users.data,
        count: users.count,
    }))
}
