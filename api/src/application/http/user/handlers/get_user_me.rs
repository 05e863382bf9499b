use axum::{Extension, extract::State};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    user::{entities::User, ports::UserService},
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/me",
    tag = "users",
    summary = "Current user",
    responses(
        (status = 200, body = User)
    ),
)]
pub async fn get_user_me(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .get_current_user(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
