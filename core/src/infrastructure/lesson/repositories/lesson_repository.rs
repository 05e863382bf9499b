use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            value_objects::{Paginated, Pagination},
        },
        lesson::{entities::Lesson, ports::LessonRepository},
    },
    entity::lessons::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresLessonRepository {
    pub db: DatabaseConnection,
}

impl PostgresLessonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl LessonRepository for PostgresLessonRepository {
    async fn fetch_lessons(&self, pagination: Pagination) -> Result<Paginated<Lesson>, CoreError> {
        let query = Entity::find();

        let (count, models) = futures::try_join!(
            query.clone().count(&self.db),
            query
                .order_by_asc(Column::Unit)
                .order_by_asc(Column::Subunit)
                .order_by_asc(Column::CreatedAt)
                .offset(pagination.skip)
                .limit(pagination.limit)
                .all(&self.db),
        )
        .map_err(|e| {
            error!("Failed to list lessons: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Paginated::new(models.iter().map(Lesson::from).collect(), count))
    }

    async fn get_lesson_by_id(&self, lesson_id: Uuid) -> Result<Option<Lesson>, CoreError> {
        let lesson = Entity::find_by_id(lesson_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get lesson by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(lesson.map(Lesson::from))
    }

    async fn create_lesson(&self, lesson: Lesson) -> Result<Lesson, CoreError> {
        let created = Entity::insert(ActiveModel::from(&lesson))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create lesson: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Lesson::from(created))
    }

    async fn update_lesson(&self, lesson: Lesson) -> Result<Lesson, CoreError> {
        let updated = ActiveModel::from(&lesson).update(&self.db).await.map_err(|e| {
            error!("Failed to update lesson {}: {}", lesson.id, e);
            CoreError::InternalServerError
        })?;

        Ok(Lesson::from(updated))
    }

    async fn delete_lesson(&self, lesson_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_by_id(lesson_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete lesson: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
