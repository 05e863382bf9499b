use axum::extract::State;
use dongopet_core::domain::health::ports::HealthCheckService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

/// Database round trip in milliseconds.
#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = u64),
        (status = 500, description = "Database unreachable")
    ),
)]
pub async fn live(State(state): State<AppState>) -> Result<Response<u64>, ApiError> {
    let elapsed = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(elapsed))
}
