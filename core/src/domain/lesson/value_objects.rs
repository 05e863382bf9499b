use uuid::Uuid;

use crate::domain::lesson::entities::LessonStatus;

#[derive(Debug, Clone, Default)]
pub struct CreateLessonInput {
    pub title: String,
    pub description: Option<String>,
    pub lesson_type: Option<i32>,
    pub unit: Option<i32>,
    pub subunit: Option<i32>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLessonInput {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub lesson_type: Option<Option<i32>>,
    pub unit: Option<Option<i32>>,
    pub subunit: Option<Option<i32>>,
    pub detail: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct CreateProgressInput {
    pub lesson_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: Option<Uuid>,
    pub progress: Option<i32>,
    pub status: Option<LessonStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProgressInput {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub teacher_id: Option<Option<Uuid>>,
    pub progress: Option<i32>,
    pub status: Option<LessonStatus>,
}
