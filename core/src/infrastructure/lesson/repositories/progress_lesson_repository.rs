use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            value_objects::{Paginated, Pagination},
        },
        lesson::{
            entities::{LessonStatus, ProgressLesson},
            ports::ProgressLessonRepository,
        },
    },
    entity::progress_lessons::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresProgressLessonRepository {
    pub db: DatabaseConnection,
}

impl PostgresProgressLessonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProgressLessonRepository for PostgresProgressLessonRepository {
    async fn fetch_progress_by_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> Result<Paginated<ProgressLesson>, CoreError> {
        let query = Entity::find().filter(Column::UserId.eq(user_id));

        let (count, models) = futures::try_join!(
            query.clone().count(&self.db),
            query
                .order_by_desc(Column::UpdatedAt)
                .offset(pagination.skip)
                .limit(pagination.limit)
                .all(&self.db),
        )
        .map_err(|e| {
            error!("Failed to list progress for user {}: {}", user_id, e);
            CoreError::InternalServerError
        })?;

        Ok(Paginated::new(
            models.iter().map(ProgressLesson::from).collect(),
            count,
        ))
    }

    async fn fetch_progress_for_lessons(
        &self,
        user_id: Uuid,
        lesson_ids: Vec<Uuid>,
    ) -> Result<Vec<ProgressLesson>, CoreError> {
        if lesson_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::LessonId.is_in(lesson_ids))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch progress for lessons: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.iter().map(ProgressLesson::from).collect())
    }

    async fn get_current_progress(&self, user_id: Uuid) -> Result<Option<ProgressLesson>, CoreError> {
        let model = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Status.eq(i16::from(LessonStatus::InProgress)))
            .order_by_desc(Column::UpdatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get current progress: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(ProgressLesson::from))
    }

    async fn get_progress_by_id(&self, progress_id: Uuid) -> Result<Option<ProgressLesson>, CoreError> {
        let model = Entity::find_by_id(progress_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get progress by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(ProgressLesson::from))
    }

    async fn create_progress(&self, progress: ProgressLesson) -> Result<ProgressLesson, CoreError> {
        let created = Entity::insert(ActiveModel::from(&progress))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create progress: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ProgressLesson::from(created))
    }

    async fn update_progress(&self, progress: ProgressLesson) -> Result<ProgressLesson, CoreError> {
        let updated = ActiveModel::from(&progress)
            .update(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update progress {}: {}", progress.id, e);
                CoreError::InternalServerError
            })?;

        Ok(ProgressLesson::from(updated))
    }
}
