use dongopet_core::domain::{
    common::value_objects::deserialize_patch,
    lesson::value_objects::{CreateLessonInput, UpdateLessonInput},
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLessonValidator {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lesson_type: Option<i32>,
    /// Defaults to 1.
    #[serde(default)]
    pub unit: Option<i32>,
    /// Defaults to 1.
    #[serde(default)]
    pub subunit: Option<i32>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl From<CreateLessonValidator> for CreateLessonInput {
    fn from(payload: CreateLessonValidator) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            lesson_type: payload.lesson_type,
            unit: payload.unit,
            subunit: payload.subunit,
            detail: payload.detail,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateLessonValidator {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<i32>)]
    pub lesson_type: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<i32>)]
    pub unit: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<i32>)]
    pub subunit: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub detail: Option<Option<String>>,
}

impl From<UpdateLessonValidator> for UpdateLessonInput {
    fn from(payload: UpdateLessonValidator) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            lesson_type: payload.lesson_type,
            unit: payload.unit,
            subunit: payload.subunit,
            detail: payload.detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_cleared_from_absent() {
        let payload: UpdateLessonValidator =
            serde_json::from_str(r#"{"detail": null, "unit": 3}"#).unwrap();

        let input = UpdateLessonInput::from(payload);

        assert_eq!(input.detail, Some(None));
        assert_eq!(input.unit, Some(Some(3)));
        assert_eq!(input.subunit, None);
        assert_eq!(input.title, None);
    }

    #[test]
    fn long_title_is_rejected() {
        let payload = CreateLessonValidator {
            title: "x".repeat(256),
            description: None,
            lesson_type: None,
            unit: None,
            subunit: None,
            detail: None,
        };
        assert!(payload.validate().is_err());
    }
}
