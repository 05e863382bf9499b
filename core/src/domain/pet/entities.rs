use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{
        generate_timestamp,
        policies::Owned,
        value_objects::{patch, patch_required},
    },
    pet::value_objects::{CreatePetInput, UpdatePetInput},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Pet {
    pub id: Uuid,
    pub user_id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pet {
    pub fn new(user_id: Uuid, input: CreatePetInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            name: input.name,
            species: input.species,
            gender: input.gender,
            age: input.age,
            breed: input.breed,
            weight: input.weight,
            height: input.height,
            color: input.color,
            avatar: input.avatar,
            allergy_summary: input.allergy_summary,
            vaccination_summary: input.vaccination_summary,
            relationship: input.relationship,
            behavior_notes: input.behavior_notes,
            food_preferences: input.food_preferences,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, input: UpdatePetInput) {
        patch_required(&mut self.name, input.name);
        patch(&mut self.species, input.species);
        patch(&mut self.gender, input.gender);
        patch(&mut self.age, input.age);
        patch(&mut self.breed, input.breed);
        patch(&mut self.weight, input.weight);
        patch(&mut self.height, input.height);
        patch(&mut self.color, input.color);
        patch(&mut self.avatar, input.avatar);
        patch(&mut self.allergy_summary, input.allergy_summary);
        patch(&mut self.vaccination_summary, input.vaccination_summary);
        patch(&mut self.relationship, input.relationship);
        patch(&mut self.behavior_notes, input.behavior_notes);
        patch(&mut self.food_preferences, input.food_preferences);
        self.updated_at = Utc::now();
    }
}

impl Owned for Pet {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_leaves_unset_fields_alone() {
        let mut pet = Pet::new(
            Uuid::new_v4(),
            CreatePetInput {
                name: "Mochi".to_string(),
                breed: Some("Shiba".to_string()),
                weight: Some(9.5),
                ..Default::default()
            },
        );
        let before = pet.clone();

        pet.update(UpdatePetInput {
            weight: Some(Some(10.2)),
            color: Some(None),
            ..Default::default()
        });

        assert_eq!(pet.weight, Some(10.2));
        assert_eq!(pet.name, before.name);
        assert_eq!(pet.breed, before.breed);
        assert_eq!(pet.color, None);
        assert!(pet.updated_at >= before.updated_at);
    }
}
