use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{
        generate_timestamp,
        policies::Owned,
        value_objects::{patch, patch_required},
    },
    user::value_objects::UpdateProfileInput,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip)]
    pub hashed_password: String,
    pub name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub native_language: Option<String>,
    pub purpose_language: Option<String>,
    pub reason: Option<String>,
    /// Daily learning time, in minutes.
    pub time: Option<i32>,
    pub teacher: Option<String>,
    pub current_lesson: Option<String>,
    pub extra_minute: Option<i32>,
    pub membership: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        email: String,
        hashed_password: String,
        name: Option<String>,
        is_superuser: bool,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            email,
            hashed_password,
            name,
            is_active: true,
            is_superuser,
            native_language: None,
            purpose_language: None,
            reason: None,
            time: None,
            teacher: None,
            current_lesson: None,
            extra_minute: None,
            membership: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the supplied profile fields. The password must already be hashed.
    pub fn update_profile(&mut self, input: UpdateProfileInput, hashed_password: Option<String>) {
        patch_required(&mut self.email, input.email);
        patch_required(&mut self.hashed_password, hashed_password);
        patch(&mut self.name, input.name);
        patch(&mut self.native_language, input.native_language);
        patch(&mut self.purpose_language, input.purpose_language);
        patch(&mut self.reason, input.reason);
        patch(&mut self.time, input.time);
        patch(&mut self.teacher, input.teacher);
        patch(&mut self.current_lesson, input.current_lesson);
        patch(&mut self.extra_minute, input.extra_minute);
        patch(&mut self.membership, input.membership);
        self.updated_at = Utc::now();
    }
}

impl Owned for User {
    fn owner_id(&self) -> Uuid {
        self.id
    }
}
