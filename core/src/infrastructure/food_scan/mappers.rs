use sea_orm::ActiveValue::Set;

use crate::{domain::food_scan::entities::FoodScanResult, entity::food_scan_results};

impl From<&food_scan_results::Model> for FoodScanResult {
    fn from(model: &food_scan_results::Model) -> Self {
        Self {
            id: model.id,
            pet_id: model.pet_id,
            food_name: model.food_name.clone(),
            calories: model.calories,
            protein: model.protein,
            carbs: model.carbs,
            fat: model.fat,
            fiber: model.fiber,
            moisture: model.moisture,
            is_safe: model.is_safe,
            safety_message: model.safety_message.clone(),
            toxic_ingredients: model.toxic_ingredients.clone(),
            nutrition_health_score: model.nutrition_health_score,
            health_score_description: model.health_score_description.clone(),
            health_score_recommendations: model.health_score_recommendations.clone(),
            has_multiple_items: model.has_multiple_items,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<food_scan_results::Model> for FoodScanResult {
    fn from(model: food_scan_results::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&FoodScanResult> for food_scan_results::ActiveModel {
    fn from(result: &FoodScanResult) -> Self {
        Self {
            id: Set(result.id),
            pet_id: Set(result.pet_id),
            food_name: Set(result.food_name.clone()),
            calories: Set(result.calories),
            protein: Set(result.protein),
            carbs: Set(result.carbs),
            fat: Set(result.fat),
            fiber: Set(result.fiber),
            moisture: Set(result.moisture),
            is_safe: Set(result.is_safe),
            safety_message: Set(result.safety_message.clone()),
            toxic_ingredients: Set(result.toxic_ingredients.clone()),
            nutrition_health_score: Set(result.nutrition_health_score),
            health_score_description: Set(result.health_score_description.clone()),
            health_score_recommendations: Set(result.health_score_recommendations.clone()),
            has_multiple_items: Set(result.has_multiple_items),
            created_at: Set(result.created_at.fixed_offset()),
            updated_at: Set(result.updated_at.fixed_offset()),
        }
    }
}
