use axum::{
    Router, middleware,
    routing::{get, put},
};
use utoipa::OpenApi;

use super::handlers::{
    create_lesson::{__path_create_lesson, create_lesson},
    delete_lesson::{__path_delete_lesson, delete_lesson},
    get_lessons::{__path_get_lessons, get_lessons},
    update_lesson::{__path_update_lesson, update_lesson},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_lessons, create_lesson, update_lesson, delete_lesson))]
pub struct LessonApiDoc;

pub fn lesson_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/lessons", state.args.server.root_path),
            get(get_lessons).post(create_lesson),
        )
        .route(
            &format!("{}/lessons/{{lesson_id}}", state.args.server.root_path),
            put(update_lesson).delete(delete_lesson),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
