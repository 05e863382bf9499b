pub mod create_progress;
pub mod get_current_progress;
pub mod get_lessons_with_progress;
pub mod get_user_progress;
pub mod update_progress;
