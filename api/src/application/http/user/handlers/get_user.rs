use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    user::{entities::User, ports::UserService},
};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "users",
    summary = "Get user",
    description = "Regular users may only read their own account.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = User),
        (status = 403, description = "The user doesn't have enough privileges"),
        (status = 404, description = "User not found")
    ),
)]
pub async fn get_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .get_user(identity, user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
