use sea_orm::ActiveValue::Set;

use crate::{domain::pet::entities::Pet, entity::pets};

impl From<&pets::Model> for Pet {
    fn from(model: &pets::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            species: model.species.clone(),
            gender: model.gender.clone(),
            age: model.age,
            breed: model.breed.clone(),
            weight: model.weight,
            height: model.height,
            color: model.color.clone(),
            avatar: model.avatar.clone(),
            allergy_summary: model.allergy_summary.clone(),
            vaccination_summary: model.vaccination_summary.clone(),
            relationship: model.relationship.clone(),
            behavior_notes: model.behavior_notes.clone(),
            food_preferences: model.food_preferences.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<pets::Model> for Pet {
    fn from(model: pets::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&Pet> for pets::ActiveModel {
    fn from(pet: &Pet) -> Self {
        Self {
            id: Set(pet.id),
            user_id: Set(pet.user_id),
            name: Set(pet.name.clone()),
            species: Set(pet.species.clone()),
            gender: Set(pet.gender.clone()),
            age: Set(pet.age),
            breed: Set(pet.breed.clone()),
            weight: Set(pet.weight),
            height: Set(pet.height),
            color: Set(pet.color.clone()),
            avatar: Set(pet.avatar.clone()),
            allergy_summary: Set(pet.allergy_summary.clone()),
            vaccination_summary: Set(pet.vaccination_summary.clone()),
            relationship: Set(pet.relationship.clone()),
            behavior_notes: Set(pet.behavior_notes.clone()),
            food_preferences: Set(pet.food_preferences.clone()),
            created_at: Set(pet.created_at.fixed_offset()),
            updated_at: Set(pet.updated_at.fixed_offset()),
        }
    }
}
