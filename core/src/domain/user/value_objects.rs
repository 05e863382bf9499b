#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<Option<String>>,
    pub native_language: Option<Option<String>>,
    pub purpose_language: Option<Option<String>>,
    pub reason: Option<Option<String>>,
    pub time: Option<Option<i32>>,
    pub teacher: Option<Option<String>>,
    pub current_lesson: Option<Option<String>>,
    pub extra_minute: Option<Option<i32>>,
    pub membership: Option<Option<String>>,
}

/// Administrative update: profile fields plus account flags.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub profile: UpdateProfileInput,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
}
