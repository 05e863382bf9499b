use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{generate_timestamp, value_objects::patch},
    pet_health::value_objects::{
        UpdateAllergyInput, UpdateVaccinationInput, UpsertInsuranceInput,
        UpsertMedicalConditionInput, UpsertMedicationInput,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Vaccination {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub name: Option<String>,
    /// Free-form date as entered by the owner.
    pub date: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vaccination {
    pub fn new(pet_id: Uuid, name: Option<String>, date: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            pet_id,
            name,
            date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, input: UpdateVaccinationInput) {
        patch(&mut self.name, input.name);
        patch(&mut self.date, input.date);
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Allergy {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Allergy {
    pub fn new(pet_id: Uuid, name: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            pet_id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, input: UpdateAllergyInput) {
        patch(&mut self.name, input.name);
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Insurance {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub provider: Option<String>,
    pub policy: Option<String>,
    pub coverage: Option<String>,
    pub deductible: Option<String>,
    pub reimbursement: Option<String>,
    pub expires: Option<String>,
    pub emergency_hotline: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Insurance {
    /// An empty record, to be filled by [`Insurance::merge`].
    pub fn empty(pet_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            pet_id,
            provider: None,
            policy: None,
            coverage: None,
            deductible: None,
            reimbursement: None,
            expires: None,
            emergency_hotline: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn merge(&mut self, input: UpsertInsuranceInput) {
        patch(&mut self.provider, input.provider);
        patch(&mut self.policy, input.policy);
        patch(&mut self.coverage, input.coverage);
        patch(&mut self.deductible, input.deductible);
        patch(&mut self.reimbursement, input.reimbursement);
        patch(&mut self.expires, input.expires);
        patch(&mut self.emergency_hotline, input.emergency_hotline);
        patch(&mut self.notes, input.notes);
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MedicalCondition {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub name: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MedicalCondition {
    pub fn empty(pet_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            pet_id,
            name: None,
            note: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn merge(&mut self, input: UpsertMedicalConditionInput) {
        patch(&mut self.name, input.name);
        patch(&mut self.note, input.note);
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Medication {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub start_end: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Medication {
    pub fn empty(pet_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            pet_id,
            name: None,
            dosage: None,
            frequency: None,
            start_end: None,
            note: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn merge(&mut self, input: UpsertMedicationInput) {
        patch(&mut self.name, input.name);
        patch(&mut self.dosage, input.dosage);
        patch(&mut self.frequency, input.frequency);
        patch(&mut self.start_end, input.start_end);
        patch(&mut self.note, input.note);
        self.updated_at = Utc::now();
    }
}
