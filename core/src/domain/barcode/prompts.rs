use crate::domain::barcode::entities::DecodedBarcode;

pub const PRODUCT_SYSTEM_PROMPT: &str = r#"You are a pet food product database.
Given a barcode and its symbology, describe the most plausible pet food product for it.
Reply with one JSON object and nothing else:
{
  "product_name": string,
  "brand": string,
  "categories": string,
  "ingredients": string,
  "nutrition_facts": {
    "energy_kcal": number,
    "fat": number,
    "saturated_fat": number,
    "carbohydrates": number,
    "sugars": number,
    "fiber": number,
    "proteins": number,
    "salt": number,
    "sodium": number
  },
  "serving_size": string,
  "packaging": string,
  "labels": string,
  "nutrition_grade": string,
  "nova_group": number
}
Nutrition facts are per 100 g. Use null for anything you cannot estimate."#;

pub fn product_user_prompt(barcode: &DecodedBarcode) -> String {
    format!(
        "Barcode: {}\nSymbology: {}",
        barcode.text, barcode.symbology
    )
}
