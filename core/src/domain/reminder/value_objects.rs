use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone)]
pub struct CreateReminderInput {
    pub category: String,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub reminder_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reminder_time: NaiveTime,
    pub dosage: Option<String>,
    pub frequency: String,
    pub end_frequency_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReminderInput {
    pub category: Option<String>,
    pub title: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub reminder_date: Option<Option<NaiveDate>>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub reminder_time: Option<NaiveTime>,
    pub dosage: Option<Option<String>>,
    pub frequency: Option<String>,
    pub end_frequency_date: Option<Option<NaiveDate>>,
    pub is_active: Option<bool>,
}
