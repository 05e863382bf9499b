use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    delete_user::{__path_delete_user, delete_user},
    delete_user_me::{__path_delete_user_me, delete_user_me},
    get_user::{__path_get_user, get_user},
    get_user_me::{__path_get_user_me, get_user_me},
    get_users::{__path_get_users, get_users},
    register_user::{__path_register_user, register_user},
    update_user::{__path_update_user, update_user},
    update_user_me::{__path_update_user_me, update_user_me},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    register_user,
    get_users,
    get_user_me,
    update_user_me,
    delete_user_me,
    get_user,
    update_user,
    delete_user
))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    let protected = Router::new()
        .route(&format!("{root_path}/users"), get(get_users))
        .route(
            &format!("{root_path}/users/me"),
            get(get_user_me).patch(update_user_me).delete(delete_user_me),
        )
        .route(
            &format!("{root_path}/users/{{user_id}}"),
            get(get_user).patch(update_user).delete(delete_user),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth));

    Router::new()
        .route(&format!("{root_path}/users/signup"), post(register_user))
        .merge(protected)
}
