use axum::{Extension, extract::State};
use dongopet_core::domain::{authentication::value_objects::Identity, chat::ports::ChatService};

use crate::application::http::{
    chat::validators::{ChatMessageResponse, ChatMessageValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/get_text_response",
    tag = "chat",
    summary = "Ask the assistant",
    request_body = ChatMessageValidator,
    responses(
        (status = 200, body = ChatMessageResponse),
        (status = 502, description = "The model call failed")
    ),
)]
pub async fn get_text_response(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<ChatMessageValidator>,
) -> Result<Response<ChatMessageResponse>, ApiError> {
    let message = state
        .service
        .get_text_response(identity, payload.message)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatMessageResponse { message }))
}
