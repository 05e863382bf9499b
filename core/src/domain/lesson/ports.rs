use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        value_objects::{Paginated, Pagination},
    },
    lesson::{
        entities::{Lesson, LessonWithProgress, ProgressLesson, ProgressWithLesson},
        value_objects::{
            CreateLessonInput, CreateProgressInput, UpdateLessonInput, UpdateProgressInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait LessonRepository: Send + Sync {
    fn fetch_lessons(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<Lesson>, CoreError>> + Send;

    fn get_lesson_by_id(
        &self,
        lesson_id: Uuid,
    ) -> impl Future<Output = Result<Option<Lesson>, CoreError>> + Send;

    fn create_lesson(&self, lesson: Lesson) -> impl Future<Output = Result<Lesson, CoreError>> + Send;

    fn update_lesson(&self, lesson: Lesson) -> impl Future<Output = Result<Lesson, CoreError>> + Send;

    fn delete_lesson(&self, lesson_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProgressLessonRepository: Send + Sync {
    fn fetch_progress_by_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<ProgressLesson>, CoreError>> + Send;

    fn fetch_progress_for_lessons(
        &self,
        user_id: Uuid,
        lesson_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<ProgressLesson>, CoreError>> + Send;

    /// The most recent in-progress entry of the user.
    fn get_current_progress(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<ProgressLesson>, CoreError>> + Send;

    fn get_progress_by_id(
        &self,
        progress_id: Uuid,
    ) -> impl Future<Output = Result<Option<ProgressLesson>, CoreError>> + Send;

    fn create_progress(
        &self,
        progress: ProgressLesson,
    ) -> impl Future<Output = Result<ProgressLesson, CoreError>> + Send;

    fn update_progress(
        &self,
        progress: ProgressLesson,
    ) -> impl Future<Output = Result<ProgressLesson, CoreError>> + Send;
}

pub trait LessonService: Send + Sync {
    fn get_lessons(
        &self,
        identity: Identity,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<Lesson>, CoreError>> + Send;

    fn create_lesson(
        &self,
        identity: Identity,
        input: CreateLessonInput,
    ) -> impl Future<Output = Result<Lesson, CoreError>> + Send;

    fn update_lesson(
        &self,
        identity: Identity,
        lesson_id: Uuid,
        input: UpdateLessonInput,
    ) -> impl Future<Output = Result<Lesson, CoreError>> + Send;

    fn delete_lesson(
        &self,
        identity: Identity,
        lesson_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn create_progress(
        &self,
        identity: Identity,
        input: CreateProgressInput,
    ) -> impl Future<Output = Result<ProgressLesson, CoreError>> + Send;

    fn get_user_progress(
        &self,
        identity: Identity,
        user_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<ProgressLesson>, CoreError>> + Send;

    fn update_progress(
        &self,
        identity: Identity,
        progress_id: Uuid,
        input: UpdateProgressInput,
    ) -> impl Future<Output = Result<ProgressLesson, CoreError>> + Send;

    fn get_current_progress(
        &self,
        identity: Identity,
        user_id: Uuid,
    ) -> impl Future<Output = Result<ProgressWithLesson, CoreError>> + Send;

    /// Every lesson paired with the caller's progress, or a not-started placeholder.
    fn get_lessons_with_progress(
        &self,
        identity: Identity,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<LessonWithProgress>, CoreError>> + Send;
}
