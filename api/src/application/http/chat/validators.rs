use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChatMessageValidator {
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatMessageResponse {
    pub message: String,
}

/// Tuning knobs of the retrieval-augmented answer.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RagChatQuery {
    /// Text placed before the retrieved context in the system prompt.
    pub context_prefix: Option<String>,
    /// Defaults to 1000.
    #[validate(range(min = 1, message = "max_tokens must be positive"))]
    pub max_tokens: Option<u32>,
    /// Defaults to 0.7.
    #[validate(range(min = 0.0, max = 2.0, message = "temperature must be between 0 and 2"))]
    pub temperature: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_is_rejected() {
        let payload: ChatMessageValidator = serde_json::from_str(r#"{"message": ""}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn temperature_is_bounded() {
        let query = RagChatQuery {
            temperature: Some(3.5),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = RagChatQuery {
            temperature: Some(0.2),
            max_tokens: Some(200),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }
}
