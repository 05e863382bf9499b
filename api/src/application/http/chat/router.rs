use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    get_text_response::{__path_get_text_response, get_text_response},
    get_text_response_rag::{__path_get_text_response_rag, get_text_response_rag},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_text_response, get_text_response_rag))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/chat/get_text_response", state.args.server.root_path),
            post(get_text_response),
        )
        .route(
            &format!("{}/chat/get_text_response_rag", state.args.server.root_path),
            post(get_text_response_rag),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
