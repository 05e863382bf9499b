const FOOD_ANALYSIS_INSTRUCTIONS: &str = r#"You are a veterinary nutrition assistant with strong food recognition skills.
Look at the photo and identify every distinct food item, including parts of mixed dishes,
treats, toppings and drinks. Judge each item for a dog or cat eating it.

For every item report:
- a specific name and a category
- a confidence between 0 and 100
- calories and macro-nutrients in grams (protein, carbs, fat, fiber, sugar, moisture)
- whether it is safe for pets, a short safety message and any toxic ingredients
- a bounding box as percentages of the image (x, y, width, height)

Answer with one JSON object and nothing else, using this shape:
{
  "foodItems": [
    {
      "name": string,
      "category": string,
      "confidence": number,
      "calories": number,
      "protein": number,
      "carbs": number,
      "fat": number,
      "fiber": number,
      "sugar": number,
      "moisture": number,
      "petSafety": {
        "isSafe": boolean,
        "safetyMessage": string,
        "toxicIngredients": [string]
      },
      "boundingBox": {"x": number, "y": number, "width": number, "height": number},
      "isPartOfMixedDish": boolean,
      "parentDish": string__PORTION_ITEM_FIELDS__
    }
  ],
  "totalCalories": number,
  "hasMultipleItems": boolean,
  "nutritionHealthScore": number,
  "healthScoreDetails": {
    "description": string,
    "recommendations": string
  },
__PORTION_FIELDS__  "imageQualityAssessment": {
    "lighting": string,
    "clarity": string,
    "recognizabilityScore": number
  }
}

Prefer accuracy over completeness and lower the confidence when unsure.
Estimate from the visible portion, counting sauces, oils and garnish."#;

const PORTION_ITEM_FIELDS: &str = r#",
      "estimatedPortionSize": string,
      "estimatedWeight": number,
      "standardServings": number,
      "measurementMethod": string,
      "estimationConfidence": number"#;

const PORTION_FIELDS: &str = r#"  "hasReferenceObject": boolean,
  "referenceObjects": [
    {"type": string, "confidence": number, "estimatedRealWorldDimensions": {"width": number, "height": number}}
  ],
  "portionEstimationConfidence": number,
"#;

pub const FOOD_ANALYSIS_USER_PROMPT: &str = "Analyze this food image. Identify all food items, \
estimate their nutrition precisely and tell whether each one is safe for a pet to eat.";

/// System instruction for the vision model, optionally asking for portion estimates.
pub fn food_analysis_system_prompt(include_portion_estimates: bool) -> String {
    let (item_fields, fields) = if include_portion_estimates {
        (PORTION_ITEM_FIELDS, PORTION_FIELDS)
    } else {
        ("", "")
    };

    FOOD_ANALYSIS_INSTRUCTIONS
        .replace("__PORTION_ITEM_FIELDS__", item_fields)
        .replace("__PORTION_FIELDS__", fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portion_fields_only_when_requested() {
        let plain = food_analysis_system_prompt(false);
        let detailed = food_analysis_system_prompt(true);

        assert!(!plain.contains("estimatedWeight"));
        assert!(!plain.contains("__PORTION"));
        assert!(detailed.contains("estimatedWeight"));
        assert!(detailed.contains("portionEstimationConfidence"));
    }
}
