pub mod allergies;
pub mod food_scan_results;
pub mod insurances;
pub mod lessons;
pub mod medical_conditions;
pub mod medications;
pub mod pets;
pub mod progress_lessons;
pub mod reminders;
pub mod users;
pub mod vaccinations;
