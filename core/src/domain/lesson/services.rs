use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    barcode::ports::{BarcodeDecoder, ProductCatalog},
    common::{
        entities::app_errors::CoreError,
        policies::{OwnerId, ensure_owner},
        services::Service,
        value_objects::{Paginated, Pagination},
    },
    crypto::ports::HasherRepository,
    food_scan::ports::FoodScanResultRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    lesson::{
        entities::{Lesson, LessonWithProgress, ProgressLesson, ProgressWithLesson},
        ports::{LessonRepository, LessonService, ProgressLessonRepository},
        value_objects::{
            CreateLessonInput, CreateProgressInput, UpdateLessonInput, UpdateProgressInput,
        },
    },
    llm::ports::{LLMClient, VectorStore},
    pet::ports::PetRepository,
    pet_health::ports::{
        AllergyRepository, InsuranceRepository, MedicalConditionRepository, MedicationRepository,
        VaccinationRepository,
    },
    reminder::ports::ReminderRepository,
    user::ports::UserRepository,
};

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC>
    Service<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC>
where
    LS: LessonRepository,
{
    async fn find_lesson(&self, lesson_id: Uuid) -> Result<Lesson, CoreError> {
        self.lesson_repository
            .get_lesson_by_id(lesson_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Lesson"))
    }
}

impl<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC> LessonService
    for Service<U, H, T, P, RM, VA, AL, IN, MC, MD, LS, PL, FS, LLM, VS, PC, BD, HC>
where
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
    P: PetRepository,
    RM: ReminderRepository,
    VA: VaccinationRepository,
    AL: AllergyRepository,
    IN: InsuranceRepository,
    MC: MedicalConditionRepository,
    MD: MedicationRepository,
    LS: LessonRepository,
    PL: ProgressLessonRepository,
    FS: FoodScanResultRepository,
    LLM: LLMClient,
    VS: VectorStore,
    PC: ProductCatalog,
    BD: BarcodeDecoder,
    HC: HealthCheckRepository,
{
    async fn get_lessons(
        &self,
        _identity: Identity,
        pagination: Pagination,
    ) -> Result<Paginated<Lesson>, CoreError> {
        self.lesson_repository.fetch_lessons(pagination).await
    }

    async fn create_lesson(&self, identity: Identity, input: CreateLessonInput) -> Result<Lesson, CoreError> {
        self.lesson_repository
            .create_lesson(Lesson::new(identity.id(), input))
            .await
    }

    async fn update_lesson(
        &self,
        identity: Identity,
        lesson_id: Uuid,
        input: UpdateLessonInput,
    ) -> Result<Lesson, CoreError> {
        let mut lesson = self.find_lesson(lesson_id).await?;
        ensure_owner(&identity, &lesson)?;

        lesson.update(input);
        self.lesson_repository.update_lesson(lesson).await
    }

    async fn delete_lesson(&self, identity: Identity, lesson_id: Uuid) -> Result<(), CoreError> {
        let lesson = self.find_lesson(lesson_id).await?;
        ensure_owner(&identity, &lesson)?;

        self.lesson_repository.delete_lesson(lesson.id).await
    }

    async fn create_progress(
        &self,
        identity: Identity,
        input: CreateProgressInput,
    ) -> Result<ProgressLesson, CoreError> {
        self.find_lesson(input.lesson_id).await?;

        self.progress_lesson_repository
            .create_progress(ProgressLesson::new(identity.id(), input))
            .await
    }

    async fn get_user_progress(
        &self,
        identity: Identity,
        user_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<ProgressLesson>, CoreError> {
        ensure_owner(&identity, &OwnerId(user_id))?;

        self.progress_lesson_repository
            .fetch_progress_by_user(user_id, pagination)
            .await
    }

    async fn update_progress(
        &self,
        identity: Identity,
        progress_id: Uuid,
        input: UpdateProgressInput,
    ) -> Result<ProgressLesson, CoreError> {
        let mut progress = self
            .progress_lesson_repository
            .get_progress_by_id(progress_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Progress lesson"))?;
        ensure_owner(&identity, &progress)?;

        progress.update(input);
        self.progress_lesson_repository.update_progress(progress).await
    }

    async fn get_current_progress(
        &self,
        identity: Identity,
        user_id: Uuid,
    ) -> Result<ProgressWithLesson, CoreError> {
        ensure_owner(&identity, &OwnerId(user_id))?;

        let progress = self
            .progress_lesson_repository
            .get_current_progress(user_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("No current progressing lesson found".to_string()))?;
        let lesson = self.find_lesson(progress.lesson_id).await?;

        Ok(ProgressWithLesson { progress, lesson })
    }

    async fn get_lessons_with_progress(
        &self,
        identity: Identity,
        pagination: Pagination,
    ) -> Result<Paginated<LessonWithProgress>, CoreError> {
        let lessons = self.lesson_repository.fetch_lessons(pagination).await?;
        let count = lessons.count;
        let lesson_ids = lessons.data.iter().map(|lesson| lesson.id).collect();

        let mut progress_by_lesson: HashMap<Uuid, ProgressLesson> = self
            .progress_lesson_repository
            .fetch_progress_for_lessons(identity.id(), lesson_ids)
            .await?
            .into_iter()
            .map(|progress| (progress.lesson_id, progress))
            .collect();

        let data: Vec<LessonWithProgress> = lessons
            .data
            .into_iter()
            .map(|lesson| {
                let progress = progress_by_lesson
                    .remove(&lesson.id)
                    .unwrap_or_else(|| ProgressLesson::not_started(identity.id(), &lesson));
                LessonWithProgress { lesson, progress }
            })
            .collect();

        Ok(Paginated::new(data, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::lesson::entities::LessonStatus, test_support::TestContext};

    fn lesson(title: &str) -> CreateLessonInput {
        CreateLessonInput {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn progress_for(lesson: &Lesson, status: LessonStatus) -> CreateProgressInput {
        CreateProgressInput {
            lesson_id: lesson.id,
            title: lesson.title.clone(),
            description: None,
            teacher_id: None,
            progress: Some(40),
            status: Some(status),
        }
    }

    #[tokio::test]
    async fn lessons_without_progress_get_a_disabled_placeholder() {
        let ctx = TestContext::new();
        let learner = ctx.identity("learner@example.com", false).await;

        let started = ctx.service.create_lesson(learner.clone(), lesson("Sit")).await.unwrap();
        ctx.service.create_lesson(learner.clone(), lesson("Stay")).await.unwrap();
        ctx.service
            .create_progress(learner.clone(), progress_for(&started, LessonStatus::InProgress))
            .await
            .unwrap();

        let page = ctx
            .service
            .get_lessons_with_progress(learner.clone(), Pagination::default())
            .await
            .unwrap();
        assert_eq!(page.count, 2);

        for entry in &page.data {
            if entry.lesson.id == started.id {
                assert_eq!(entry.progress.status, LessonStatus::InProgress);
                assert_eq!(entry.progress.progress, 40);
            } else {
                assert_eq!(entry.progress.status, LessonStatus::Disabled);
                assert_eq!(entry.progress.progress, 0);
            }
        }

        let persisted = ctx
            .service
            .get_user_progress(learner.clone(), learner.id(), Pagination::default())
            .await
            .unwrap();
        assert_eq!(persisted.count, 1);
    }

    #[tokio::test]
    async fn current_progress_pairs_with_its_lesson() {
        let ctx = TestContext::new();
        let learner = ctx.identity("learner@example.com", false).await;

        let none = ctx.service.get_current_progress(learner.clone(), learner.id()).await;
        assert!(matches!(none, Err(CoreError::NotFound(_))));

        let sit = ctx.service.create_lesson(learner.clone(), lesson("Sit")).await.unwrap();
        ctx.service
            .create_progress(learner.clone(), progress_for(&sit, LessonStatus::InProgress))
            .await
            .unwrap();

        let current = ctx
            .service
            .get_current_progress(learner.clone(), learner.id())
            .await
            .unwrap();
        assert_eq!(current.lesson.id, sit.id);
    }

    #[tokio::test]
    async fn other_users_progress_is_private() {
        let ctx = TestContext::new();
        let learner = ctx.identity("learner@example.com", false).await;
        let other = ctx.identity("other@example.com", false).await;

        let result = ctx
            .service
            .get_user_progress(other, learner.id(), Pagination::default())
            .await;
        assert_eq!(result, Err(CoreError::PermissionDenied));
    }

    #[tokio::test]
    async fn only_the_author_edits_a_lesson() {
        let ctx = TestContext::new();
        let author = ctx.identity("author@example.com", false).await;
        let other = ctx.identity("other@example.com", false).await;
        let sit = ctx.service.create_lesson(author.clone(), lesson("Sit")).await.unwrap();

        let denied = ctx
            .service
            .update_lesson(other, sit.id, UpdateLessonInput::default())
            .await;
        assert_eq!(denied, Err(CoreError::PermissionDenied));

        ctx.service.delete_lesson(author.clone(), sit.id).await.unwrap();
        let page = ctx.service.get_lessons(author, Pagination::default()).await.unwrap();
        assert_eq!(page.count, 0);
    }
}
