use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use dongopet_core::domain::food_scan::value_objects::MAX_IMAGE_SIZE;
use utoipa::OpenApi;

use super::handlers::{
    analyze_food_image::{__path_analyze_food_image, analyze_food_image},
    health_check::{__path_health_check, health_check},
    scan_barcode::{__path_scan_barcode, scan_barcode},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

/// Room for the multipart framing and the other form fields.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_food_image, scan_barcode, health_check))]
pub struct UtilsApiDoc;

pub fn utils_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    let uploads = Router::new()
        .route(
            &format!("{root_path}/utils/analyze-food-image"),
            post(analyze_food_image),
        )
        .route(&format!("{root_path}/utils/scan-barcode"), post(scan_barcode))
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD))
        .layer(middleware::from_fn_with_state(state.clone(), auth));

    Router::new()
        .route(&format!("{root_path}/utils/health-check/"), get(health_check))
        .merge(uploads)
}
