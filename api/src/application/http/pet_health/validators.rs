use dongopet_core::domain::{
    common::value_objects::deserialize_patch,
    pet_health::value_objects::{
        CreateAllergyInput, CreateVaccinationInput, UpdateAllergyInput, UpdateVaccinationInput,
        UpsertInsuranceInput, UpsertMedicalConditionInput, UpsertMedicationInput,
    },
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateVaccinationValidator {
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl From<CreateVaccinationValidator> for CreateVaccinationInput {
    fn from(payload: CreateVaccinationValidator) -> Self {
        Self {
            name: payload.name,
            date: payload.date,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateVaccinationValidator {
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub date: Option<Option<String>>,
}

impl From<UpdateVaccinationValidator> for UpdateVaccinationInput {
    fn from(payload: UpdateVaccinationValidator) -> Self {
        Self {
            name: payload.name,
            date: payload.date,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateAllergyValidator {
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    #[serde(default)]
    pub name: Option<String>,
}

impl From<CreateAllergyValidator> for CreateAllergyInput {
    fn from(payload: CreateAllergyValidator) -> Self {
        Self { name: payload.name }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAllergyValidator {
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
}

impl From<UpdateAllergyValidator> for UpdateAllergyInput {
    fn from(payload: UpdateAllergyValidator) -> Self {
        Self { name: payload.name }
    }
}

/// Merged into the pet's insurance, which is created on first write.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpsertInsuranceValidator {
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub provider: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub policy: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub coverage: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub deductible: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub reimbursement: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub expires: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub emergency_hotline: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

impl From<UpsertInsuranceValidator> for UpsertInsuranceInput {
    fn from(payload: UpsertInsuranceValidator) -> Self {
        Self {
            provider: payload.provider,
            policy: payload.policy,
            coverage: payload.coverage,
            deductible: payload.deductible,
            reimbursement: payload.reimbursement,
            expires: payload.expires,
            emergency_hotline: payload.emergency_hotline,
            notes: payload.notes,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpsertMedicalConditionValidator {
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub note: Option<Option<String>>,
}

impl From<UpsertMedicalConditionValidator> for UpsertMedicalConditionInput {
    fn from(payload: UpsertMedicalConditionValidator) -> Self {
        Self {
            name: payload.name,
            note: payload.note,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpsertMedicationValidator {
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub dosage: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub frequency: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub start_end: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub note: Option<Option<String>>,
}

impl From<UpsertMedicationValidator> for UpsertMedicationInput {
    fn from(payload: UpsertMedicationValidator) -> Self {
        Self {
            name: payload.name,
            dosage: payload.dosage,
            frequency: payload.frequency,
            start_end: payload.start_end,
            note: payload.note,
        }
    }
}
