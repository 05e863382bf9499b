pub mod reminder_repository;
