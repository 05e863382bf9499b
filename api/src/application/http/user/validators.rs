use dongopet_core::domain::{
    common::value_objects::deserialize_patch,
    user::value_objects::{RegisterUserInput, UpdateProfileInput, UpdateUserInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserValidator {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 8, max = 40, message = "password must be 8-40 characters"))]
    pub password: String,

    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    #[serde(default)]
    pub name: Option<String>,
}

impl From<RegisterUserValidator> for RegisterUserInput {
    fn from(payload: RegisterUserValidator) -> Self {
        Self {
            email: payload.email,
            password: payload.password,
            name: payload.name,
        }
    }
}

/// Profile edit; omitted fields stay as they are, `null` clears them.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    #[validate(email(message = "email must be a valid address"))]
    #[serde(default)]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 40, message = "password must be 8-40 characters"))]
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub native_language: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub purpose_language: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub reason: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<i32>)]
    pub time: Option<Option<i32>>,

    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub teacher: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub current_lesson: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<i32>)]
    pub extra_minute: Option<Option<i32>>,

    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub membership: Option<Option<String>>,
}

impl From<UpdateProfileValidator> for UpdateProfileInput {
    fn from(payload: UpdateProfileValidator) -> Self {
        Self {
            email: payload.email,
            password: payload.password,
            name: payload.name,
            native_language: payload.native_language,
            purpose_language: payload.purpose_language,
            reason: payload.reason,
            time: payload.time,
            teacher: payload.teacher,
            current_lesson: payload.current_lesson,
            extra_minute: payload.extra_minute,
            membership: payload.membership,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserValidator {
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: UpdateProfileValidator,

    #[serde(default)]
    pub is_active: Option<bool>,

    #[serde(default)]
    pub is_superuser: Option<bool>,
}

impl From<UpdateUserValidator> for UpdateUserInput {
    fn from(payload: UpdateUserValidator) -> Self {
        Self {
            profile: payload.profile.into(),
            is_active: payload.is_active,
            is_superuser: payload.is_superuser,
        }
    }
}
