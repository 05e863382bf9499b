use axum::extract::State;
use dongopet_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 500, description = "Database unreachable")
    ),
)]
pub async fn ready(State(state): State<AppState>) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
