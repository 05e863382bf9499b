use regex::Regex;
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::common::entities::app_errors::CoreError;

const JSON_OBJECT_PATTERN: &str = r"(?s)\{.*\}";

/// Extracts a JSON object from free-form model output.
///
/// The whole text is tried first. Otherwise the widest `{...}` span is parsed.
/// Anything else is [`CoreError::UnparsableAiResponse`], never a partial object.
pub fn recover_json_object(raw: &str) -> Result<Map<String, Value>, CoreError> {
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(raw) {
        return Ok(object);
    }

    let pattern = Regex::new(JSON_OBJECT_PATTERN).map_err(|e| {
        tracing::error!("invalid JSON extraction pattern: {}", e);
        CoreError::InternalServerError
    })?;

    let candidate = pattern
        .find(raw)
        .ok_or(CoreError::UnparsableAiResponse)?
        .as_str();

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => Ok(object),
        _ => {
            warn!("model output did not contain a parsable JSON object");
            Err(CoreError::UnparsableAiResponse)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn strict_json_is_returned_as_is() {
        let object = recover_json_object(r#"{"foodItems": []}"#).unwrap();
        assert_eq!(Value::Object(object), json!({"foodItems": []}));
    }

    #[test]
    fn object_is_extracted_from_surrounding_prose() {
        let object = recover_json_object(r#"Here is data: {"a":1,"b":[1,2]} trailing"#).unwrap();
        assert_eq!(Value::Object(object), json!({"a": 1, "b": [1, 2]}));
    }

    #[test]
    fn multiline_fenced_output_is_recovered() {
        let raw = "```json\n{\n  \"name\": \"kibble\"\n}\n```";
        let object = recover_json_object(raw).unwrap();
        assert_eq!(object.get("name"), Some(&json!("kibble")));
    }

    #[test]
    fn text_without_an_object_fails() {
        assert_eq!(
            recover_json_object("I cannot analyze this image."),
            Err(CoreError::UnparsableAiResponse)
        );
    }

    #[test]
    fn broken_object_fails() {
        assert_eq!(
            recover_json_object("result: {\"a\": 1,, } done"),
            Err(CoreError::UnparsableAiResponse)
        );
    }

    #[test]
    fn top_level_array_is_not_an_object() {
        assert_eq!(
            recover_json_object("[1, 2, 3]"),
            Err(CoreError::UnparsableAiResponse)
        );
    }
}
