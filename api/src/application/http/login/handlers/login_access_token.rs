use axum::{Form, extract::State};
use dongopet_core::domain::{
    authentication::{ports::AuthService, value_objects::LoginInput},
    jwt::entities::AccessToken,
};
use validator::Validate;

use crate::application::http::{
    login::validators::LoginForm,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/access-token",
    tag = "login",
    summary = "Log in",
    description = "Exchanges an email and password for a bearer access token.",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, body = AccessToken),
        (status = 400, description = "Incorrect email or password, or inactive user")
    ),
)]
pub async fn login_access_token(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response<AccessToken>, ApiError> {
    form.validate()?;

    let token = state
        .service
        .login(LoginInput {
            email: form.username,
            password: form.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(token))
}
