use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use dongopet_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "E_FORBIDDEN"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT"),
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_BAD_GATEWAY"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound(message) => ApiError::NotFound(message),
            CoreError::PermissionDenied
            | CoreError::Invalid(_)
            | CoreError::InvalidCredentials
            | CoreError::InactiveUser => ApiError::BadRequest(error.to_string()),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::Conflict(message) => ApiError::Conflict(message),
            CoreError::InvalidToken => ApiError::Unauthorized(error.to_string()),
            CoreError::ExternalServiceError(_) | CoreError::UnparsableAiResponse => {
                ApiError::BadGateway(error.to_string())
            }
            CoreError::InsecureConfiguration(_) | CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect::<Vec<String>>();
        messages.sort();

        ApiError::BadRequest(messages.join(", "))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            error!("{} {}: {}", status.as_u16(), code, self);
        }

        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs the payload's `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get, routing::post};
    use axum_test::TestServer;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct NamePayload {
        #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
        name: String,
    }

    async fn echo_name(ValidateJson(payload): ValidateJson<NamePayload>) -> String {
        payload.name
    }

    async fn missing_pet() -> Result<(), ApiError> {
        Err(CoreError::not_found("Pet").into())
    }

    async fn foreign_pet() -> Result<(), ApiError> {
        Err(CoreError::PermissionDenied.into())
    }

    async fn model_gibberish() -> Result<(), ApiError> {
        Err(CoreError::UnparsableAiResponse.into())
    }

    fn server() -> TestServer {
        let app = Router::new()
            .route("/missing", get(missing_pet))
            .route("/foreign", get(foreign_pet))
            .route("/gibberish", get(model_gibberish))
            .route("/echo", post(echo_name));

        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn not_found_renders_code_status_and_message() {
        let response = server().get("/missing").await;

        response.assert_status_not_found();
        response.assert_json(&json!({
            "code": "E_NOT_FOUND",
            "status": 404,
            "message": "Pet not found"
        }));
    }

    #[tokio::test]
    async fn permission_denied_is_a_bad_request() {
        let response = server().get("/foreign").await;

        response.assert_status_bad_request();
        let body: ApiErrorResponse = response.json();
        assert_eq!(body.message, "Not enough permissions");
    }

    #[tokio::test]
    async fn unparsable_model_output_is_a_bad_gateway() {
        let response = server().get("/gibberish").await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: ApiErrorResponse = response.json();
        assert_eq!(body.code, "E_BAD_GATEWAY");
        assert_eq!(body.message, "Failed to parse AI response as JSON");
    }

    #[tokio::test]
    async fn validation_failures_are_reported_as_bad_request() {
        let response = server().post("/echo").json(&json!({"name": ""})).await;

        response.assert_status_bad_request();
        let body: ApiErrorResponse = response.json();
        assert_eq!(body.message, "name must be 1-255 characters");
    }

    #[tokio::test]
    async fn valid_payload_reaches_the_handler() {
        let response = server().post("/echo").json(&json!({"name": "Mochi"})).await;

        response.assert_status_ok();
        response.assert_text("Mochi");
    }

    #[test]
    fn core_errors_map_to_http_statuses() {
        let cases = [
            (CoreError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (CoreError::Conflict("x".into()), StatusCode::CONFLICT),
            (CoreError::InvalidToken, StatusCode::UNAUTHORIZED),
            (CoreError::InactiveUser, StatusCode::BAD_REQUEST),
            (CoreError::InvalidCredentials, StatusCode::BAD_REQUEST),
            (
                CoreError::ExternalServiceError("down".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status_and_code().0, status);
        }
    }
}
