use sea_orm::ActiveValue::Set;

use crate::{
    domain::pet_health::entities::{Allergy, Insurance, MedicalCondition, Medication, Vaccination},
    entity::{allergies, insurances, medical_conditions, medications, vaccinations},
};

impl From<&vaccinations::Model> for Vaccination {
    fn from(model: &vaccinations::Model) -> Self {
        Self {
            id: model.id,
            pet_id: model.pet_id,
            name: model.name.clone(),
            date: model.date.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<vaccinations::Model> for Vaccination {
    fn from(model: vaccinations::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&Vaccination> for vaccinations::ActiveModel {
    fn from(vaccination: &Vaccination) -> Self {
        Self {
            id: Set(vaccination.id),
            pet_id: Set(vaccination.pet_id),
            name: Set(vaccination.name.clone()),
            date: Set(vaccination.date.clone()),
            created_at: Set(vaccination.created_at.fixed_offset()),
            updated_at: Set(vaccination.updated_at.fixed_offset()),
        }
    }
}

impl From<&allergies::Model> for Allergy {
    fn from(model: &allergies::Model) -> Self {
        Self {
            id: model.id,
            pet_id: model.pet_id,
            name: model.name.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<allergies::Model> for Allergy {
    fn from(model: allergies::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&Allergy> for allergies::ActiveModel {
    fn from(allergy: &Allergy) -> Self {
        Self {
            id: Set(allergy.id),
            pet_id: Set(allergy.pet_id),
            name: Set(allergy.name.clone()),
            created_at: Set(allergy.created_at.fixed_offset()),
            updated_at: Set(allergy.updated_at.fixed_offset()),
        }
    }
}

impl From<&insurances::Model> for Insurance {
    fn from(model: &insurances::Model) -> Self {
        Self {
            id: model.id,
            pet_id: model.pet_id,
            provider: model.provider.clone(),
            policy: model.policy.clone(),
            coverage: model.coverage.clone(),
            deductible: model.deductible.clone(),
            reimbursement: model.reimbursement.clone(),
            expires: model.expires.clone(),
            emergency_hotline: model.emergency_hotline.clone(),
            notes: model.notes.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<insurances::Model> for Insurance {
    fn from(model: insurances::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&Insurance> for insurances::ActiveModel {
    fn from(insurance: &Insurance) -> Self {
        Self {
            id: Set(insurance.id),
            pet_id: Set(insurance.pet_id),
            provider: Set(insurance.provider.clone()),
            policy: Set(insurance.policy.clone()),
            coverage: Set(insurance.coverage.clone()),
            deductible: Set(insurance.deductible.clone()),
            reimbursement: Set(insurance.reimbursement.clone()),
            expires: Set(insurance.expires.clone()),
            emergency_hotline: Set(insurance.emergency_hotline.clone()),
            notes: Set(insurance.notes.clone()),
            created_at: Set(insurance.created_at.fixed_offset()),
            updated_at: Set(insurance.updated_at.fixed_offset()),
        }
    }
}

impl From<&medical_conditions::Model> for MedicalCondition {
    fn from(model: &medical_conditions::Model) -> Self {
        Self {
            id: model.id,
            pet_id: model.pet_id,
            name: model.name.clone(),
            note: model.note.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<medical_conditions::Model> for MedicalCondition {
    fn from(model: medical_conditions::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&MedicalCondition> for medical_conditions::ActiveModel {
    fn from(condition: &MedicalCondition) -> Self {
        Self {
            id: Set(condition.id),
            pet_id: Set(condition.pet_id),
            name: Set(condition.name.clone()),
            note: Set(condition.note.clone()),
            created_at: Set(condition.created_at.fixed_offset()),
            updated_at: Set(condition.updated_at.fixed_offset()),
        }
    }
}

impl From<&medications::Model> for Medication {
    fn from(model: &medications::Model) -> Self {
        Self {
            id: model.id,
            pet_id: model.pet_id,
            name: model.name.clone(),
            dosage: model.dosage.clone(),
            frequency: model.frequency.clone(),
            start_end: model.start_end.clone(),
            note: model.note.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<medications::Model> for Medication {
    fn from(model: medications::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&Medication> for medications::ActiveModel {
    fn from(medication: &Medication) -> Self {
        Self {
            id: Set(medication.id),
            pet_id: Set(medication.pet_id),
            name: Set(medication.name.clone()),
            dosage: Set(medication.dosage.clone()),
            frequency: Set(medication.frequency.clone()),
            start_end: Set(medication.start_end.clone()),
            note: Set(medication.note.clone()),
            created_at: Set(medication.created_at.fixed_offset()),
            updated_at: Set(medication.updated_at.fixed_offset()),
        }
    }
}
