use sea_orm::ActiveValue::Set;

use crate::{domain::user::entities::User, entity::users};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email.clone(),
            hashed_password: model.hashed_password.clone(),
            name: model.name.clone(),
            is_active: model.is_active,
            is_superuser: model.is_superuser,
            native_language: model.native_language.clone(),
            purpose_language: model.purpose_language.clone(),
            reason: model.reason.clone(),
            time: model.time,
            teacher: model.teacher.clone(),
            current_lesson: model.current_lesson.clone(),
            extra_minute: model.extra_minute,
            membership: model.membership.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&User> for users::ActiveModel {
    fn from(user: &User) -> Self {
        Self {
            id: Set(user.id),
            email: Set(user.email.clone()),
            hashed_password: Set(user.hashed_password.clone()),
            name: Set(user.name.clone()),
            is_active: Set(user.is_active),
            is_superuser: Set(user.is_superuser),
            native_language: Set(user.native_language.clone()),
            purpose_language: Set(user.purpose_language.clone()),
            reason: Set(user.reason.clone()),
            time: Set(user.time),
            teacher: Set(user.teacher.clone()),
            current_lesson: Set(user.current_lesson.clone()),
            extra_minute: Set(user.extra_minute),
            membership: Set(user.membership.clone()),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        }
    }
}
