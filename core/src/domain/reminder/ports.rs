use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        value_objects::{Paginated, Pagination},
    },
    reminder::{
        entities::Reminder,
        value_objects::{CreateReminderInput, UpdateReminderInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ReminderRepository: Send + Sync {
    /// Reminders of every pet owned by `owner_id`, or of all pets when `None`.
    fn fetch_reminders_by_owner(
        &self,
        owner_id: Option<Uuid>,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<Reminder>, CoreError>> + Send;

    fn fetch_reminders_by_pet(
        &self,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<Reminder>, CoreError>> + Send;

    fn get_reminder_by_id(
        &self,
        reminder_id: Uuid,
    ) -> impl Future<Output = Result<Option<Reminder>, CoreError>> + Send;

    fn create_reminder(
        &self,
        reminder: Reminder,
    ) -> impl Future<Output = Result<Reminder, CoreError>> + Send;

    fn update_reminder(
        &self,
        reminder: Reminder,
    ) -> impl Future<Output = Result<Reminder, CoreError>> + Send;

    fn delete_reminder(
        &self,
        reminder_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait ReminderService: Send + Sync {
    fn get_reminders(
        &self,
        identity: Identity,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<Reminder>, CoreError>> + Send;

    fn get_pet_reminders(
        &self,
        identity: Identity,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<Reminder>, CoreError>> + Send;

    fn get_reminder(
        &self,
        identity: Identity,
        reminder_id: Uuid,
    ) -> impl Future<Output = Result<Reminder, CoreError>> + Send;

    fn create_reminder(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: CreateReminderInput,
    ) -> impl Future<Output = Result<Reminder, CoreError>> + Send;

    fn update_reminder(
        &self,
        identity: Identity,
        reminder_id: Uuid,
        input: UpdateReminderInput,
    ) -> impl Future<Output = Result<Reminder, CoreError>> + Send;

    fn delete_reminder(
        &self,
        identity: Identity,
        reminder_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
