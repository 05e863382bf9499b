pub mod lesson_repository;
pub mod progress_lesson_repository;
