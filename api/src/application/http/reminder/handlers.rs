pub mod create_reminder;
pub mod delete_reminder;
pub mod get_pet_reminders;
pub mod get_reminder;
pub mod get_reminders;
pub mod update_reminder;
