use chrono::{NaiveDate, NaiveTime};
use dongopet_core::domain::{
    common::value_objects::deserialize_patch,
    reminder::value_objects::{CreateReminderInput, UpdateReminderInput},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateReminderQuery {
    pub pet_id: Uuid,
}

/// `frequency` is descriptive only (Never, Hourly, Daily, Weekly, Monthly or free text).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReminderValidator {
    #[validate(length(min = 1, max = 50, message = "category must be 1-50 characters"))]
    pub category: String,
    #[validate(length(max = 255, message = "title must be at most 255 characters"))]
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub reminder_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub reminder_time: NaiveTime,
    #[serde(default)]
    pub dosage: Option<String>,
    #[validate(length(min = 1, max = 50, message = "frequency must be 1-50 characters"))]
    pub frequency: String,
    #[serde(default)]
    pub end_frequency_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl From<CreateReminderValidator> for CreateReminderInput {
    fn from(payload: CreateReminderValidator) -> Self {
        Self {
            category: payload.category,
            title: payload.title,
            notes: payload.notes,
            reminder_date: payload.reminder_date,
            start_date: payload.start_date,
            end_date: payload.end_date,
            reminder_time: payload.reminder_time,
            dosage: payload.dosage,
            frequency: payload.frequency,
            end_frequency_date: payload.end_frequency_date,
            is_active: payload.is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateReminderValidator {
    #[validate(length(min = 1, max = 50, message = "category must be 1-50 characters"))]
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<NaiveDate>)]
    pub reminder_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<NaiveDate>)]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<NaiveDate>)]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub reminder_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub dosage: Option<Option<String>>,
    #[validate(length(min = 1, max = 50, message = "frequency must be 1-50 characters"))]
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<NaiveDate>)]
    pub end_frequency_date: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl From<UpdateReminderValidator> for UpdateReminderInput {
    fn from(payload: UpdateReminderValidator) -> Self {
        Self {
            category: payload.category,
            title: payload.title,
            notes: payload.notes,
            reminder_date: payload.reminder_date,
            start_date: payload.start_date,
            end_date: payload.end_date,
            reminder_time: payload.reminder_time,
            dosage: payload.dosage,
            frequency: payload.frequency,
            end_frequency_date: payload.end_frequency_date,
            is_active: payload.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_parses_dates_and_times() {
        let payload: CreateReminderValidator = serde_json::from_str(
            r#"{
                "category": "medication",
                "reminder_time": "08:30:00",
                "start_date": "2025-03-01",
                "frequency": "Daily"
            }"#,
        )
        .unwrap();

        assert!(payload.validate().is_ok());
        let input = CreateReminderInput::from(payload);
        assert_eq!(input.reminder_time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(input.start_date, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(input.is_active, None);
    }

    #[test]
    fn overlong_category_is_rejected() {
        let payload: CreateReminderValidator = serde_json::from_value(serde_json::json!({
            "category": "x".repeat(51),
            "reminder_time": "08:30:00",
            "frequency": "Never"
        }))
        .unwrap();

        assert!(payload.validate().is_err());
    }
}
