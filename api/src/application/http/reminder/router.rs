use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    create_reminder::{__path_create_reminder, create_reminder},
    delete_reminder::{__path_delete_reminder, delete_reminder},
    get_pet_reminders::{__path_get_pet_reminders, get_pet_reminders},
    get_reminder::{__path_get_reminder, get_reminder},
    get_reminders::{__path_get_reminders, get_reminders},
    update_reminder::{__path_update_reminder, update_reminder},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    get_reminders,
    create_reminder,
    get_pet_reminders,
    get_reminder,
    update_reminder,
    delete_reminder
))]
pub struct ReminderApiDoc;

pub fn reminder_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/reminders"),
            get(get_reminders).post(create_reminder),
        )
        .route(
            &format!("{root_path}/reminders/pet/{{pet_id}}"),
            get(get_pet_reminders),
        )
        .route(
            &format!("{root_path}/reminders/{{reminder_id}}"),
            get(get_reminder)
                .patch(update_reminder)
                .delete(delete_reminder),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
