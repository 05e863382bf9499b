use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// One analyzed food image, flattened from the first detected item. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodScanResult {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub food_name: Option<String>,
    pub calories: Option<i32>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub moisture: Option<f64>,
    pub is_safe: Option<bool>,
    pub safety_message: Option<String>,
    /// JSON array encoded as a string.
    pub toxic_ingredients: Option<String>,
    pub nutrition_health_score: Option<i32>,
    pub health_score_description: Option<String>,
    pub health_score_recommendations: Option<String>,
    pub has_multiple_items: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FoodScanResult {
    /// Builds the persisted row from an enriched analysis. `None` when no food item was detected.
    pub fn from_analysis(pet_id: Uuid, analysis: &Map<String, Value>) -> Option<Self> {
        let item = analysis
            .get("foodItems")
            .and_then(Value::as_array)
            .and_then(|items| items.first())?;

        let empty = Map::new();
        let safety = item
            .get("petSafety")
            .and_then(Value::as_object)
            .unwrap_or(&empty);
        let health = analysis
            .get("healthScoreDetails")
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let toxic_ingredients = safety
            .get("toxicIngredients")
            .filter(|value| !value.is_null())
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()))
            .to_string();

        let (now, timestamp) = generate_timestamp();

        Some(Self {
            id: Uuid::new_v7(timestamp),
            pet_id,
            food_name: text(item.get("name")),
            calories: number(item.get("calories")).map(|calories| calories.round() as i32),
            protein: number(item.get("protein")),
            carbs: number(item.get("carbs")),
            fat: number(item.get("fat")),
            fiber: number(item.get("fiber")),
            moisture: number(item.get("moisture")),
            is_safe: safety.get("isSafe").and_then(Value::as_bool),
            safety_message: text(safety.get("safetyMessage")),
            toxic_ingredients: Some(toxic_ingredients),
            nutrition_health_score: number(analysis.get("nutritionHealthScore"))
                .map(|score| score.round() as i32),
            health_score_description: text(health.get("description")),
            health_score_recommendations: text(health.get("recommendations")),
            has_multiple_items: Some(
                analysis
                    .get("hasMultipleItems")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            ),
            created_at: now,
            updated_at: now,
        })
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

/// Strings pass through, lists of strings are joined one per line.
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Array(lines) => Some(
            lines
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        _ => None,
    }
}
