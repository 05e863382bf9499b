use axum::{
    Extension,
    extract::{Path, State},
};
use dongopet_core::domain::{authentication::value_objects::Identity, user::ports::UserService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{Message, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{user_id}",
    tag = "users",
    summary = "Delete user",
    description = "Deletes an account and everything it owns. Superuser only.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = Message),
        (status = 403, description = "The user doesn't have enough privileges"),
        (status = 404, description = "User not found")
    ),
)]
pub async fn delete_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Message>, ApiError> {
    state
        .service
        .delete_user(identity, user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Message::new("User deleted successfully")))
}
