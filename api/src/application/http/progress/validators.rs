use dongopet_core::domain::{
    common::value_objects::deserialize_patch,
    lesson::{
        entities::LessonStatus,
        value_objects::{CreateProgressInput, UpdateProgressInput},
    },
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProgressValidator {
    pub lesson_id: Uuid,
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub teacher_id: Option<Uuid>,
    /// Defaults to 0.
    #[validate(range(min = 0, max = 100, message = "progress must be between 0 and 100"))]
    #[serde(default)]
    pub progress: Option<i32>,
    /// Defaults to `disabled`.
    #[serde(default)]
    pub status: Option<LessonStatus>,
}

impl From<CreateProgressValidator> for CreateProgressInput {
    fn from(payload: CreateProgressValidator) -> Self {
        Self {
            lesson_id: payload.lesson_id,
            title: payload.title,
            description: payload.description,
            teacher_id: payload.teacher_id,
            progress: payload.progress,
            status: payload.status,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProgressValidator {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<Uuid>)]
    pub teacher_id: Option<Option<Uuid>>,
    #[validate(range(min = 0, max = 100, message = "progress must be between 0 and 100"))]
    #[serde(default)]
    pub progress: Option<i32>,
    #[serde(default)]
    pub status: Option<LessonStatus>,
}

impl From<UpdateProgressValidator> for UpdateProgressInput {
    fn from(payload: UpdateProgressValidator) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            teacher_id: payload.teacher_id,
            progress: payload.progress,
            status: payload.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_snake_case() {
        let payload: UpdateProgressValidator =
            serde_json::from_str(r#"{"status": "in_progress", "progress": 40}"#).unwrap();

        let input = UpdateProgressInput::from(payload);

        assert_eq!(input.status, Some(LessonStatus::InProgress));
        assert_eq!(input.progress, Some(40));
        assert_eq!(input.teacher_id, None);
    }

    #[test]
    fn progress_above_one_hundred_is_rejected() {
        let payload: CreateProgressValidator = serde_json::from_str(
            r#"{"lesson_id": "0191e0d6-0000-7000-8000-000000000000", "title": "Sit", "progress": 120}"#,
        )
        .unwrap();
        assert!(payload.validate().is_err());
    }
}
