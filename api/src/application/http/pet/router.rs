use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    create_pet::{__path_create_pet, create_pet},
    delete_pet::{__path_delete_pet, delete_pet},
    get_pet::{__path_get_pet, get_pet},
    get_pets::{__path_get_pets, get_pets},
    update_pet::{__path_update_pet, update_pet},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_pets, get_pet, create_pet, update_pet, delete_pet))]
pub struct PetApiDoc;

pub fn pet_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/pets", state.args.server.root_path),
            get(get_pets).post(create_pet),
        )
        .route(
            &format!("{}/pets/{{pet_id}}", state.args.server.root_path),
            get(get_pet).put(update_pet).delete(delete_pet),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
