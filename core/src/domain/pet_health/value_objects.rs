#[derive(Debug, Clone, Default)]
pub struct CreateVaccinationInput {
    pub name: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateVaccinationInput {
    pub name: Option<Option<String>>,
    pub date: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateAllergyInput {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAllergyInput {
    pub name: Option<Option<String>>,
}

// Singleton records share one payload for create and update: the supplied
// fields are merged into the existing row, or into an empty one.

#[derive(Debug, Clone, Default)]
pub struct UpsertInsuranceInput {
    pub provider: Option<Option<String>>,
    pub policy: Option<Option<String>>,
    pub coverage: Option<Option<String>>,
    pub deductible: Option<Option<String>>,
    pub reimbursement: Option<Option<String>>,
    pub expires: Option<Option<String>>,
    pub emergency_hotline: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpsertMedicalConditionInput {
    pub name: Option<Option<String>>,
    pub note: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpsertMedicationInput {
    pub name: Option<Option<String>>,
    pub dosage: Option<Option<String>>,
    pub frequency: Option<Option<String>>,
    pub start_end: Option<Option<String>>,
    pub note: Option<Option<String>>,
}
