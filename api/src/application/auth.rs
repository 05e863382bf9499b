use axum::{
    RequestPartsExt,
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use dongopet_core::domain::authentication::{
    ports::AuthService, value_objects::AuthorizeRequestInput,
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("Not authenticated".to_string()))?;

    Ok(bearer.token().to_string())
}

/// Resolves the bearer token to an active user and stores it as the request's `Identity`.
pub async fn auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = req.into_parts();
    let token = extract_token_from_bearer(&mut parts).await?;

    let identity = state
        .service
        .authorize_request(AuthorizeRequestInput { token })
        .await
        .map_err(|e| {
            debug!("Rejected request to {}: {}", parts.uri.path(), e);
            ApiError::from(e)
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
