use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        generate_timestamp,
        policies::Owned,
        value_objects::{patch, patch_required},
    },
    lesson::value_objects::{
        CreateLessonInput, CreateProgressInput, UpdateLessonInput, UpdateProgressInput,
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
    #[default]
    Disabled,
    Active,
    InProgress,
    Completed,
}

impl From<LessonStatus> for i16 {
    fn from(status: LessonStatus) -> Self {
        match status {
            LessonStatus::Disabled => 0,
            LessonStatus::Active => 1,
            LessonStatus::InProgress => 2,
            LessonStatus::Completed => 3,
        }
    }
}

impl TryFrom<i16> for LessonStatus {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LessonStatus::Disabled),
            1 => Ok(LessonStatus::Active),
            2 => Ok(LessonStatus::InProgress),
            3 => Ok(LessonStatus::Completed),
            other => Err(CoreError::Invalid(format!("unknown lesson status {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Lesson {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub lesson_type: Option<i32>,
    pub unit: Option<i32>,
    pub subunit: Option<i32>,
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lesson {
    pub fn new(owner_id: Uuid, input: CreateLessonInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            owner_id,
            title: input.title,
            description: input.description,
            lesson_type: input.lesson_type,
            unit: Some(input.unit.unwrap_or(1)),
            subunit: Some(input.subunit.unwrap_or(1)),
            detail: input.detail,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, input: UpdateLessonInput) {
        patch_required(&mut self.title, input.title);
        patch(&mut self.description, input.description);
        patch(&mut self.lesson_type, input.lesson_type);
        patch(&mut self.unit, input.unit);
        patch(&mut self.subunit, input.subunit);
        patch(&mut self.detail, input.detail);
        self.updated_at = Utc::now();
    }
}

impl Owned for Lesson {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

/// A learner's progress through one lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProgressLesson {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub teacher_id: Option<Uuid>,
    pub user_id: Uuid,
    pub lesson_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub progress: i32,
    pub status: LessonStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProgressLesson {
    pub fn new(user_id: Uuid, input: CreateProgressInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            owner_id: user_id,
            teacher_id: input.teacher_id,
            user_id,
            lesson_id: input.lesson_id,
            title: input.title,
            description: input.description,
            progress: input.progress.unwrap_or(0),
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Placeholder progress for a lesson the user has not started. Never persisted.
    pub fn not_started(user_id: Uuid, lesson: &Lesson) -> Self {
        Self::new(
            user_id,
            CreateProgressInput {
                lesson_id: lesson.id,
                title: lesson.title.clone(),
                description: lesson.description.clone(),
                teacher_id: None,
                progress: None,
                status: None,
            },
        )
    }

    pub fn update(&mut self, input: UpdateProgressInput) {
        patch_required(&mut self.title, input.title);
        patch(&mut self.description, input.description);
        patch(&mut self.teacher_id, input.teacher_id);
        patch_required(&mut self.progress, input.progress);
        patch_required(&mut self.status, input.status);
        self.updated_at = Utc::now();
    }
}

impl Owned for ProgressLesson {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProgressWithLesson {
    pub progress: ProgressLesson,
    pub lesson: Lesson,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LessonWithProgress {
    pub lesson: Lesson,
    pub progress: ProgressLesson,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_and_from_storage_codes() {
        for status in [
            LessonStatus::Disabled,
            LessonStatus::Active,
            LessonStatus::InProgress,
            LessonStatus::Completed,
        ] {
            let code: i16 = status.into();
            assert_eq!(LessonStatus::try_from(code), Ok(status));
        }
        assert!(LessonStatus::try_from(9).is_err());
    }

    #[test]
    fn new_lesson_defaults_unit_and_subunit() {
        let lesson = Lesson::new(
            Uuid::new_v4(),
            CreateLessonInput {
                title: "Sit".to_string(),
                ..Default::default()
            },
        );
        assert_eq!((lesson.unit, lesson.subunit), (Some(1), Some(1)));
    }
}
