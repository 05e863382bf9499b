use axum::extract::State;
use dongopet_core::domain::user::{entities::User, ports::UserService};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::RegisterUserValidator,
};

#[utoipa::path(
    post,
    path = "/signup",
    tag = "users",
    summary = "Register",
    description = "Creates a new account without the need to be logged in.",
    request_body = RegisterUserValidator,
    responses(
        (status = 201, body = User),
        (status = 409, description = "A user with this email already exists")
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterUserValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .register_user(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(user))
}
