use axum::{Extension, extract::State};
use dongopet_core::domain::{authentication::value_objects::Identity, user::ports::UserService};

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{Message, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/me",
    tag = "users",
    summary = "Delete own account",
    responses(
        (status = 200, body = Message),
        (status = 403, description = "Super users are not allowed to delete themselves")
    ),
)]
pub async fn delete_user_me(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Response<Message>, ApiError> {
    state
        .service
        .delete_current_user(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Message::new("User deleted successfully")))
}
