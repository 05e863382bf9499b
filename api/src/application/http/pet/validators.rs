use dongopet_core::domain::{
    common::value_objects::deserialize_patch,
    pet::value_objects::{CreatePetInput, UpdatePetInput},
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePetValidator {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub allergy_summary: Option<String>,
    #[serde(default)]
    pub vaccination_summary: Option<String>,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub behavior_notes: Option<String>,
    #[serde(default)]
    pub food_preferences: Option<String>,
}

impl From<CreatePetValidator> for CreatePetInput {
    fn from(payload: CreatePetValidator) -> Self {
        Self {
            name: payload.name,
            species: payload.species,
            gender: payload.gender,
            age: payload.age,
            breed: payload.breed,
            weight: payload.weight,
            height: payload.height,
            color: payload.color,
            avatar: payload.avatar,
            allergy_summary: payload.allergy_summary,
            vaccination_summary: payload.vaccination_summary,
            relationship: payload.relationship,
            behavior_notes: payload.behavior_notes,
            food_preferences: payload.food_preferences,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePetValidator {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub species: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub gender: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<i32>)]
    pub age: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub breed: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<f64>)]
    pub weight: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<f64>)]
    pub height: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub color: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub avatar: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub allergy_summary: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub vaccination_summary: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub relationship: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub behavior_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    #[schema(value_type = Option<String>)]
    pub food_preferences: Option<Option<String>>,
}

impl From<UpdatePetValidator> for UpdatePetInput {
    fn from(payload: UpdatePetValidator) -> Self {
        Self {
            name: payload.name,
            species: payload.species,
            gender: payload.gender,
            age: payload.age,
            breed: payload.breed,
            weight: payload.weight,
            height: payload.height,
            color: payload.color,
            avatar: payload.avatar,
            allergy_summary: payload.allergy_summary,
            vaccination_summary: payload.vaccination_summary,
            relationship: payload.relationship,
            behavior_notes: payload.behavior_notes,
            food_preferences: payload.food_preferences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_keeps_unset_fields_apart_from_cleared_ones() {
        let payload: UpdatePetValidator =
            serde_json::from_str(r#"{"weight": 4.2, "breed": null}"#).unwrap();

        let input = UpdatePetInput::from(payload);

        assert_eq!(input.weight, Some(Some(4.2)));
        assert_eq!(input.breed, Some(None));
        assert_eq!(input.name, None);
        assert_eq!(input.species, None);
    }

    #[test]
    fn empty_name_is_rejected() {
        let payload: CreatePetValidator = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(payload.validate().is_err());
    }
}
