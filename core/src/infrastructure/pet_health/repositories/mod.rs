pub mod allergy_repository;
pub mod insurance_repository;
pub mod medical_condition_repository;
pub mod medication_repository;
pub mod vaccination_repository;
