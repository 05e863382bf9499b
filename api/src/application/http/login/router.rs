use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::login_access_token::{__path_login_access_token, login_access_token};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(login_access_token))]
pub struct LoginApiDoc;

pub fn login_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/login/access-token", state.args.server.root_path),
        post(login_access_token),
    )
}
