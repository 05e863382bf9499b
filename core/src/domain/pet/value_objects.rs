#[derive(Debug, Clone, Default)]
pub struct CreatePetInput {
    pub name: String,
    pub species: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub breed: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub color: Option<String>,
    pub avatar: Option<String>,
    pub allergy_summary: Option<String>,
    pub vaccination_summary: Option<String>,
    pub relationship: Option<String>,
    pub behavior_notes: Option<String>,
    pub food_preferences: Option<String>,
}

/// `None` leaves a field untouched, `Some(None)` clears a nullable one.
#[derive(Debug, Clone, Default)]
pub struct UpdatePetInput {
    pub name: Option<String>,
    pub species: Option<Option<String>>,
    pub gender: Option<Option<String>>,
    pub age: Option<Option<i32>>,
    pub breed: Option<Option<String>>,
    pub weight: Option<Option<f64>>,
    pub height: Option<Option<f64>>,
    pub color: Option<Option<String>>,
    pub avatar: Option<Option<String>>,
    pub allergy_summary: Option<Option<String>>,
    pub vaccination_summary: Option<Option<String>>,
    pub relationship: Option<Option<String>>,
    pub behavior_notes: Option<Option<String>>,
    pub food_preferences: Option<Option<String>>,
}
