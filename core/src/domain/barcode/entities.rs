use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "Not available";

/// A barcode found in an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBarcode {
    pub text: String,
    pub symbology: String,
}

/// Nutriments per 100 g.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionFacts {
    pub energy_kcal: Option<f64>,
    pub fat: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub sugars: Option<f64>,
    pub fiber: Option<f64>,
    pub proteins: Option<f64>,
    pub salt: Option<f64>,
    pub sodium: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductData {
    pub barcode: String,
    pub barcode_type: String,
    pub product_name: String,
    pub brand: String,
    pub categories: String,
    pub ingredients: String,
    pub nutrition_facts: NutritionFacts,
    pub serving_size: Option<String>,
    pub packaging: Option<String>,
    pub labels: Option<String>,
    pub image_url: Option<String>,
    pub nutrition_grade: Option<String>,
    pub ecoscore_grade: Option<String>,
    pub nova_group: Option<i32>,
}

impl ProductData {
    /// Maps a model-generated description, shaped like this struct, onto product data.
    pub fn from_generated(barcode: &DecodedBarcode, fields: &Map<String, Value>) -> Self {
        let nutrition = fields
            .get("nutrition_facts")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let fact = |key: &str| lenient_number(nutrition.get(key));

        Self {
            barcode: barcode.text.clone(),
            barcode_type: barcode.symbology.clone(),
            product_name: text_or(fields.get("product_name"), UNKNOWN),
            brand: text_or(fields.get("brand"), UNKNOWN),
            categories: text_or(fields.get("categories"), UNKNOWN),
            ingredients: text_or(fields.get("ingredients"), NOT_AVAILABLE),
            nutrition_facts: NutritionFacts {
                energy_kcal: fact("energy_kcal"),
                fat: fact("fat"),
                saturated_fat: fact("saturated_fat"),
                carbohydrates: fact("carbohydrates"),
                sugars: fact("sugars"),
                fiber: fact("fiber"),
                proteins: fact("proteins"),
                salt: fact("salt"),
                sodium: fact("sodium"),
            },
            serving_size: optional_text(fields.get("serving_size")),
            packaging: optional_text(fields.get("packaging")),
            labels: optional_text(fields.get("labels")),
            image_url: optional_text(fields.get("image_url")),
            nutrition_grade: optional_text(fields.get("nutrition_grade")),
            ecoscore_grade: optional_text(fields.get("ecoscore_grade")),
            nova_group: lenient_number(fields.get("nova_group")).map(|group| group as i32),
        }
    }
}

/// Product lookup response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BarcodeScan {
    pub success: bool,
    pub message: String,
    pub data: ProductData,
}

impl BarcodeScan {
    pub fn scanned(data: ProductData) -> Self {
        Self {
            success: true,
            message: "Barcode scanned successfully".to_string(),
            data,
        }
    }
}

/// Accepts numbers and numeric strings such as `"12.5"`.
pub fn lenient_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

pub fn optional_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

pub fn text_or(value: Option<&Value>, default: &str) -> String {
    optional_text(value).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn generated_product_falls_back_to_unknown() {
        let barcode = DecodedBarcode {
            text: "3017620422003".to_string(),
            symbology: "EAN_13".to_string(),
        };
        let fields = match json!({
            "product_name": "Salmon Bites",
            "nutrition_facts": {"proteins": "31.5", "fat": 9, "salt": null},
            "nova_group": 3
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let product = ProductData::from_generated(&barcode, &fields);

        assert_eq!(product.barcode, "3017620422003");
        assert_eq!(product.barcode_type, "EAN_13");
        assert_eq!(product.product_name, "Salmon Bites");
        assert_eq!(product.brand, UNKNOWN);
        assert_eq!(product.ingredients, NOT_AVAILABLE);
        assert_eq!(product.nutrition_facts.proteins, Some(31.5));
        assert_eq!(product.nutrition_facts.fat, Some(9.0));
        assert_eq!(product.nutrition_facts.salt, None);
        assert_eq!(product.nova_group, Some(3));
    }
}
