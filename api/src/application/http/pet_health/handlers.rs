pub mod allergy;
pub mod insurance;
pub mod medical_condition;
pub mod medication;
pub mod vaccination;
