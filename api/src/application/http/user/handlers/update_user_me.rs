use axum::{Extension, extract::State};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    user::{entities::User, ports::UserService},
};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::UpdateProfileValidator,
};

#[utoipa::path(
    patch,
    path = "/me",
    tag = "users",
    summary = "Update own profile",
    description = "Updates only the supplied fields of the current user.",
    request_body = UpdateProfileValidator,
    responses(
        (status = 200, body = User),
        (status = 409, description = "A user with this email already exists")
    ),
)]
pub async fn update_user_me(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .update_current_user(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
