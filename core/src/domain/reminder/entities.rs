use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{
        generate_timestamp,
        value_objects::{patch, patch_required},
    },
    reminder::value_objects::{CreateReminderInput, UpdateReminderInput},
};

/// A pet-care reminder. Recurrence fields are descriptive only, nothing schedules them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Reminder {
    pub id: Uuid,
    pub pet_id: Uuid,
    /// Food, Walk, Medication, Grooming, Vet appointment or Other.
    pub category: String,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub reminder_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reminder_time: NaiveTime,
    pub dosage: Option<String>,
    /// Never, Hourly, Daily, Weekly, Monthly or a custom description.
    pub frequency: String,
    pub end_frequency_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reminder {
    pub fn new(pet_id: Uuid, input: CreateReminderInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            pet_id,
            category: input.category,
            title: input.title,
            notes: input.notes,
            reminder_date: input.reminder_date,
            start_date: input.start_date,
            end_date: input.end_date,
            reminder_time: input.reminder_time,
            dosage: input.dosage,
            frequency: input.frequency,
            end_frequency_date: input.end_frequency_date,
            is_active: input.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, input: UpdateReminderInput) {
        patch_required(&mut self.category, input.category);
        patch(&mut self.title, input.title);
        patch(&mut self.notes, input.notes);
        patch(&mut self.reminder_date, input.reminder_date);
        patch(&mut self.start_date, input.start_date);
        patch(&mut self.end_date, input.end_date);
        patch_required(&mut self.reminder_time, input.reminder_time);
        patch(&mut self.dosage, input.dosage);
        patch_required(&mut self.frequency, input.frequency);
        patch(&mut self.end_frequency_date, input.end_frequency_date);
        patch_required(&mut self.is_active, input.is_active);
        self.updated_at = Utc::now();
    }
}
