//! SeaORM entity for the `users` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub hashed_password: String,
    pub name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub native_language: Option<String>,
    pub purpose_language: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub reason: Option<String>,
    pub time: Option<i32>,
    pub teacher: Option<String>,
    pub current_lesson: Option<String>,
    pub extra_minute: Option<i32>,
    pub membership: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pets::Entity")]
    Pets,
    #[sea_orm(has_many = "super::lessons::Entity")]
    Lessons,
    #[sea_orm(has_many = "super::progress_lessons::Entity")]
    ProgressLessons,
}

impl Related<super::pets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pets.def()
    }
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl Related<super::progress_lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgressLessons.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
