use sea_orm::ActiveValue::Set;

use crate::{domain::reminder::entities::Reminder, entity::reminders};

impl From<&reminders::Model> for Reminder {
    fn from(model: &reminders::Model) -> Self {
        Self {
            id: model.id,
            pet_id: model.pet_id,
            category: model.category.clone(),
            title: model.title.clone(),
            notes: model.notes.clone(),
            reminder_date: model.reminder_date,
            start_date: model.start_date,
            end_date: model.end_date,
            reminder_time: model.reminder_time,
            dosage: model.dosage.clone(),
            frequency: model.frequency.clone(),
            end_frequency_date: model.end_frequency_date,
            is_active: model.is_active,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<reminders::Model> for Reminder {
    fn from(model: reminders::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&Reminder> for reminders::ActiveModel {
    fn from(reminder: &Reminder) -> Self {
        Self {
            id: Set(reminder.id),
            pet_id: Set(reminder.pet_id),
            category: Set(reminder.category.clone()),
            title: Set(reminder.title.clone()),
            notes: Set(reminder.notes.clone()),
            reminder_date: Set(reminder.reminder_date),
            start_date: Set(reminder.start_date),
            end_date: Set(reminder.end_date),
            reminder_time: Set(reminder.reminder_time),
            dosage: Set(reminder.dosage.clone()),
            frequency: Set(reminder.frequency.clone()),
            end_frequency_date: Set(reminder.end_frequency_date),
            is_active: Set(reminder.is_active),
            created_at: Set(reminder.created_at.fixed_offset()),
            updated_at: Set(reminder.updated_at.fixed_offset()),
        }
    }
}
