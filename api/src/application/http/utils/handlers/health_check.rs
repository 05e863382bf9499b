use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[utoipa::path(
    get,
    path = "/health-check/",
    tag = "utils",
    summary = "Health check",
    responses(
        (status = 200, body = bool)
    ),
)]
pub async fn health_check() -> Result<Response<bool>, ApiError> {
    Ok(Response::OK(true))
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;

    use super::*;

    #[tokio::test]
    async fn answers_true_without_a_token() {
        let app = Router::new().route("/utils/health-check/", get(health_check));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/utils/health-check/").await;

        response.assert_status_ok();
        response.assert_json(&true);
    }
}
