use axum::{
    Extension,
    extract::{Query, State},
};
use dongopet_core::domain::{
    authentication::value_objects::Identity,
    chat::{ports::ChatService, value_objects::RagChatInput},
};
use validator::Validate;

use crate::application::http::{
    chat::validators::{ChatMessageResponse, ChatMessageValidator, RagChatQuery},
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
    path = "/get_text_response_rag",
    tag = "chat",
    summary = "Ask the assistant with retrieved context",
    description = "Embeds the message, retrieves the closest knowledge base passages and answers from them.",
    params(RagChatQuery),
    request_body = ChatMessageValidator,
    responses(
        (status = 200, body = ChatMessageResponse),
        (status = 400, description = "Invalid tuning parameters"),
        (status = 502, description = "The model or the vector store failed")
    ),
)]
pub async fn get_text_response_rag(
    Query(query): Query<RagChatQuery>,
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ValidateJson(payload): ValidateJson<ChatMessageValidator>,
) -> Result<Response<ChatMessageResponse>, ApiError> {
    query.validate().map_err(ApiError::from)?;

    let input = RagChatInput::new(
        payload.message,
        query.context_prefix,
        query.max_tokens,
        query.temperature,
    );

    let message = state
        .service
        .get_rag_response(identity, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatMessageResponse { message }))
}
