use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Multipart form of `POST /utils/analyze-food-image`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeFoodImageForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub pet_id: Uuid,
    #[serde(default)]
    pub include_portion_estimates: Option<bool>,
}

/// Multipart form of `POST /utils/scan-barcode`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScanBarcodeForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Accepts the usual HTML form spellings of a boolean.
pub fn parse_form_bool(field: &str, value: &str) -> Result<bool, ApiError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(ApiError::BadRequest(format!("{field} must be a boolean"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_booleans() {
        assert_eq!(parse_form_bool("flag", "True"), Ok(true));
        assert_eq!(parse_form_bool("flag", "on"), Ok(true));
        assert_eq!(parse_form_bool("flag", "0"), Ok(false));
        assert_eq!(
            parse_form_bool("flag", "maybe"),
            Err(ApiError::BadRequest("flag must be a boolean".to_string()))
        );
    }
}
