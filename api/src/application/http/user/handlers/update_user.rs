use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    user::{entities::User, ports::UserService},
};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::UpdateUserValidator,
};

#[utoipa::path(
    patch,
    path = "/{user_id}",
    tag = "users",
    summary = "Update user",
    description = "Updates any account, including its active and superuser flags. Superuser only.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    request_body = UpdateUserValidator,
    responses(
        (status = 200, body = User),
        (status = 403, description = "The user doesn't have enough privileges"),
        (status = 404, description = "User not found")
    ),
)]
pub async fn update_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<UpdateUserValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .update_user(identity, user_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
