use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::domain::{
    barcode::{
        entities::{
            DecodedBarcode, NOT_AVAILABLE, NutritionFacts, ProductData, UNKNOWN, lenient_number,
            optional_text, text_or,
        },
        ports::ProductCatalog,
    },
    common::entities::app_errors::CoreError,
};

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Product lookups against an Open (Pet) Food Facts compatible API.
#[derive(Debug, Clone)]
pub struct OpenPetFoodFactsCatalog {
    base_url: String,
    client: Client,
}

impl OpenPetFoodFactsCatalog {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|e| {
                error!("Failed to build product catalog client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn product_url(&self, code: &str) -> String {
        format!("{}/api/v0/product/{}.json", self.base_url, code)
    }
}

/// Maps an API payload to product data; `None` unless `status` is 1.
fn product_from_payload(barcode: &DecodedBarcode, payload: &Value) -> Option<ProductData> {
    if payload.get("status").and_then(Value::as_i64) != Some(1) {
        return None;
    }

    let empty = Map::new();
    let product = payload
        .get("product")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let nutriments = product
        .get("nutriments")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let per_100g = |key: &str| lenient_number(nutriments.get(&format!("{key}_100g")));

    Some(ProductData {
        barcode: barcode.text.clone(),
        barcode_type: barcode.symbology.clone(),
        product_name: text_or(product.get("product_name"), UNKNOWN),
        brand: text_or(product.get("brands"), UNKNOWN),
        categories: text_or(product.get("categories"), UNKNOWN),
        ingredients: text_or(product.get("ingredients_text"), NOT_AVAILABLE),
        nutrition_facts: NutritionFacts {
            energy_kcal: per_100g("energy-kcal"),
            fat: per_100g("fat"),
            saturated_fat: per_100g("saturated-fat"),
            carbohydrates: per_100g("carbohydrates"),
            sugars: per_100g("sugars"),
            fiber: per_100g("fiber"),
            proteins: per_100g("proteins"),
            salt: per_100g("salt"),
            sodium: per_100g("sodium"),
        },
        serving_size: optional_text(product.get("serving_size")),
        packaging: optional_text(product.get("packaging")),
        labels: optional_text(product.get("labels")),
        image_url: optional_text(product.get("image_url")),
        nutrition_grade: optional_text(product.get("nutrition_grades")),
        ecoscore_grade: optional_text(product.get("ecoscore_grade")),
        nova_group: lenient_number(product.get("nova_group")).map(|group| group as i32),
    })
}

impl ProductCatalog for OpenPetFoodFactsCatalog {
    async fn find_product(&self, barcode: DecodedBarcode) -> Result<Option<ProductData>, CoreError> {
        let response = self
            .client
            .get(self.product_url(&barcode.text))
            .send()
            .await
            .map_err(|e| {
                error!("Product database request failed: {}", e);
                CoreError::ExternalServiceError(format!("Product database error: {}", e))
            })?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            error!("Product database returned {} for {}", status, barcode.text);
            return Err(CoreError::ExternalServiceError(format!(
                "Failed to fetch product data from API: {}",
                status.as_u16()
            )));
        }

        let payload: Value = response.json().await.map_err(|e| {
            error!("Failed to parse product database response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse product data: {}", e))
        })?;

        let product = product_from_payload(&barcode, &payload);
        if let Some(product) = &product {
            info!(
                barcode = %product.barcode,
                product_name = %product.product_name,
                brand = %product.brand,
                "product found"
            );
        }

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn barcode() -> DecodedBarcode {
        DecodedBarcode {
            text: "4008429091000".to_string(),
            symbology: "EAN_13".to_string(),
        }
    }

    #[test]
    fn found_product_is_mapped_with_defaults() {
        let payload = json!({
            "status": 1,
            "product": {
                "product_name": "Adult Cat Chicken",
                "brands": "Purrfect",
                "nutriments": {
                    "energy-kcal_100g": 85,
                    "proteins_100g": 9.5,
                    "saturated-fat_100g": "1.2"
                },
                "nutrition_grades": "b",
                "nova_group": 4
            }
        });

        let product = product_from_payload(&barcode(), &payload).unwrap();

        assert_eq!(product.product_name, "Adult Cat Chicken");
        assert_eq!(product.brand, "Purrfect");
        assert_eq!(product.categories, UNKNOWN);
        assert_eq!(product.ingredients, NOT_AVAILABLE);
        assert_eq!(product.nutrition_facts.energy_kcal, Some(85.0));
        assert_eq!(product.nutrition_facts.proteins, Some(9.5));
        assert_eq!(product.nutrition_facts.saturated_fat, Some(1.2));
        assert_eq!(product.nutrition_facts.sugars, None);
        assert_eq!(product.nutrition_grade.as_deref(), Some("b"));
        assert_eq!(product.nova_group, Some(4));
        assert_eq!(product.barcode_type, "EAN_13");
    }

    #[test]
    fn unknown_status_means_no_product() {
        let payload = json!({"status": 0, "status_verbose": "product not found"});
        assert_eq!(product_from_payload(&barcode(), &payload), None);
    }

    #[test]
    fn lookup_url_targets_the_v0_product_endpoint() {
        let catalog = OpenPetFoodFactsCatalog::new("https://world.openpetfoodfacts.org/").unwrap();
        assert_eq!(
            catalog.product_url("4008429091000"),
            "https://world.openpetfoodfacts.org/api/v0/product/4008429091000.json"
        );
    }
}
