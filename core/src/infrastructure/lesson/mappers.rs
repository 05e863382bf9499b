use sea_orm::ActiveValue::Set;

use crate::{
    domain::lesson::entities::{Lesson, LessonStatus, ProgressLesson},
    entity::{lessons, progress_lessons},
};

impl From<&lessons::Model> for Lesson {
    fn from(model: &lessons::Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.owner_id,
            title: model.title.clone(),
            description: model.description.clone(),
            lesson_type: model.lesson_type,
            unit: model.unit,
            subunit: model.subunit,
            detail: model.detail.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<lessons::Model> for Lesson {
    fn from(model: lessons::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&Lesson> for lessons::ActiveModel {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: Set(lesson.id),
            owner_id: Set(lesson.owner_id),
            title: Set(lesson.title.clone()),
            description: Set(lesson.description.clone()),
            lesson_type: Set(lesson.lesson_type),
            unit: Set(lesson.unit),
            subunit: Set(lesson.subunit),
            detail: Set(lesson.detail.clone()),
            created_at: Set(lesson.created_at.fixed_offset()),
            updated_at: Set(lesson.updated_at.fixed_offset()),
        }
    }
}

impl From<&progress_lessons::Model> for ProgressLesson {
    fn from(model: &progress_lessons::Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.owner_id,
            teacher_id: model.teacher_id,
            user_id: model.user_id,
            lesson_id: model.lesson_id,
            title: model.title.clone(),
            description: model.description.clone(),
            progress: model.progress,
            status: LessonStatus::try_from(model.status).unwrap_or_default(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<progress_lessons::Model> for ProgressLesson {
    fn from(model: progress_lessons::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&ProgressLesson> for progress_lessons::ActiveModel {
    fn from(progress: &ProgressLesson) -> Self {
        Self {
            id: Set(progress.id),
            owner_id: Set(progress.owner_id),
            teacher_id: Set(progress.teacher_id),
            user_id: Set(progress.user_id),
            lesson_id: Set(progress.lesson_id),
            title: Set(progress.title.clone()),
            description: Set(progress.description.clone()),
            progress: Set(progress.progress),
            status: Set(progress.status.into()),
            created_at: Set(progress.created_at.fixed_offset()),
            updated_at: Set(progress.updated_at.fixed_offset()),
        }
    }
}
