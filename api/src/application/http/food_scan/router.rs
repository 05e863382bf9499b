use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_pet_food_scan::{__path_get_pet_food_scan, get_pet_food_scan},
    get_pet_food_scans::{__path_get_pet_food_scans, get_pet_food_scans},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_pet_food_scans, get_pet_food_scan))]
pub struct FoodScanApiDoc;

pub fn food_scan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/food-scan-results/{{pet_id}}", state.args.server.root_path),
            get(get_pet_food_scans),
        )
        .route(
            &format!(
                "{}/food-scan-results/{{pet_id}}/{{result_id}}",
                state.args.server.root_path
            ),
            get(get_pet_food_scan),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
