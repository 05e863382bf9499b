use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    create_progress::{__path_create_progress, create_progress},
    get_current_progress::{__path_get_current_progress, get_current_progress},
    get_lessons_with_progress::{__path_get_lessons_with_progress, get_lessons_with_progress},
    get_user_progress::{__path_get_user_progress, get_user_progress},
    update_progress::{__path_update_progress, update_progress},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    create_progress,
    update_progress,
    get_user_progress,
    get_current_progress,
    get_lessons_with_progress
))]
pub struct ProgressApiDoc;

pub fn progress_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/progress"), post(create_progress))
        .route(
            &format!("{root_path}/progress/with-progress"),
            get(get_lessons_with_progress),
        )
        .route(
            &format!("{root_path}/progress/{{progress_id}}"),
            put(update_progress),
        )
        .route(
            &format!("{root_path}/progress/user/{{user_id}}"),
            get(get_user_progress),
        )
        .route(
            &format!("{root_path}/progress/user/{{user_id}}/current"),
            get(get_current_progress),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
