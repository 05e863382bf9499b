use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        value_objects::{Paginated, Pagination},
    },
    pet_health::{
        entities::{Allergy, Insurance, MedicalCondition, Medication, Vaccination},
        value_objects::{
            CreateAllergyInput, CreateVaccinationInput, UpdateAllergyInput,
            UpdateVaccinationInput, UpsertInsuranceInput, UpsertMedicalConditionInput,
            UpsertMedicationInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait VaccinationRepository: Send + Sync {
    fn fetch_vaccinations(
        &self,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<Vaccination>, CoreError>> + Send;

    fn get_vaccination_by_id(
        &self,
        vaccination_id: Uuid,
    ) -> impl Future<Output = Result<Option<Vaccination>, CoreError>> + Send;

    fn create_vaccination(
        &self,
        vaccination: Vaccination,
    ) -> impl Future<Output = Result<Vaccination, CoreError>> + Send;

    fn update_vaccination(
        &self,
        vaccination: Vaccination,
    ) -> impl Future<Output = Result<Vaccination, CoreError>> + Send;

    fn delete_vaccination(
        &self,
        vaccination_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AllergyRepository: Send + Sync {
    fn fetch_allergies(
        &self,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<Allergy>, CoreError>> + Send;

    fn get_allergy_by_id(
        &self,
        allergy_id: Uuid,
    ) -> impl Future<Output = Result<Option<Allergy>, CoreError>> + Send;

    fn create_allergy(
        &self,
        allergy: Allergy,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    fn update_allergy(
        &self,
        allergy: Allergy,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    fn delete_allergy(&self, allergy_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait InsuranceRepository: Send + Sync {
    fn get_insurance_by_pet(
        &self,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<Option<Insurance>, CoreError>> + Send;

    fn create_insurance(
        &self,
        insurance: Insurance,
    ) -> impl Future<Output = Result<Insurance, CoreError>> + Send;

    fn update_insurance(
        &self,
        insurance: Insurance,
    ) -> impl Future<Output = Result<Insurance, CoreError>> + Send;

    fn delete_insurance(
        &self,
        insurance_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MedicalConditionRepository: Send + Sync {
    fn get_medical_condition_by_pet(
        &self,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<Option<MedicalCondition>, CoreError>> + Send;

    fn create_medical_condition(
        &self,
        condition: MedicalCondition,
    ) -> impl Future<Output = Result<MedicalCondition, CoreError>> + Send;

    fn update_medical_condition(
        &self,
        condition: MedicalCondition,
    ) -> impl Future<Output = Result<MedicalCondition, CoreError>> + Send;

    fn delete_medical_condition(
        &self,
        condition_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MedicationRepository: Send + Sync {
    fn get_medication_by_pet(
        &self,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<Option<Medication>, CoreError>> + Send;

    fn create_medication(
        &self,
        medication: Medication,
    ) -> impl Future<Output = Result<Medication, CoreError>> + Send;

    fn update_medication(
        &self,
        medication: Medication,
    ) -> impl Future<Output = Result<Medication, CoreError>> + Send;

    fn delete_medication(
        &self,
        medication_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Health records attached to a pet. Every operation first checks pet ownership.
pub trait PetHealthService: Send + Sync {
    fn get_vaccinations(
        &self,
        identity: Identity,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<Vaccination>, CoreError>> + Send;

    fn get_vaccination(
        &self,
        identity: Identity,
        pet_id: Uuid,
        vaccination_id: Uuid,
    ) -> impl Future<Output = Result<Vaccination, CoreError>> + Send;

    fn create_vaccination(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: CreateVaccinationInput,
    ) -> impl Future<Output = Result<Vaccination, CoreError>> + Send;

    fn update_vaccination(
        &self,
        identity: Identity,
        pet_id: Uuid,
        vaccination_id: Uuid,
        input: UpdateVaccinationInput,
    ) -> impl Future<Output = Result<Vaccination, CoreError>> + Send;

    fn delete_vaccination(
        &self,
        identity: Identity,
        pet_id: Uuid,
        vaccination_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_allergies(
        &self,
        identity: Identity,
        pet_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<Allergy>, CoreError>> + Send;

    fn get_allergy(
        &self,
        identity: Identity,
        pet_id: Uuid,
        allergy_id: Uuid,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    fn create_allergy(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: CreateAllergyInput,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    fn update_allergy(
        &self,
        identity: Identity,
        pet_id: Uuid,
        allergy_id: Uuid,
        input: UpdateAllergyInput,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    fn delete_allergy(
        &self,
        identity: Identity,
        pet_id: Uuid,
        allergy_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_insurance(
        &self,
        identity: Identity,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<Insurance, CoreError>> + Send;

    fn upsert_insurance(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: UpsertInsuranceInput,
    ) -> impl Future<Output = Result<Insurance, CoreError>> + Send;

    fn delete_insurance(
        &self,
        identity: Identity,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_medical_condition(
        &self,
        identity: Identity,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<MedicalCondition, CoreError>> + Send;

    fn upsert_medical_condition(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: UpsertMedicalConditionInput,
    ) -> impl Future<Output = Result<MedicalCondition, CoreError>> + Send;

    fn delete_medical_condition(
        &self,
        identity: Identity,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_medication(
        &self,
        identity: Identity,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<Medication, CoreError>> + Send;

    fn upsert_medication(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: UpsertMedicationInput,
    ) -> impl Future<Output = Result<Medication, CoreError>> + Send;

    fn delete_medication(
        &self,
        identity: Identity,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
