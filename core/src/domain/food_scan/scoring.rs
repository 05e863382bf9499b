use serde_json::Value;

pub const BASE_SCORE: f64 = 50.0;

/// Macro-nutrient sums over the detected food items.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub fiber: f64,
    pub sugar: f64,
}

impl MacroTotals {
    pub fn from_items(items: &[Value]) -> Self {
        items.iter().fold(Self::default(), |totals, item| Self {
            calories: totals.calories + nutrient(item, "calories"),
            protein: totals.protein + nutrient(item, "protein"),
            fiber: totals.fiber + nutrient(item, "fiber"),
            sugar: totals.sugar + nutrient(item, "sugar"),
        })
    }

    /// Protein and fiber raise the score, sugar lowers it. Always within `0..=100`.
    pub fn health_score(&self) -> i32 {
        let mut score = BASE_SCORE;

        if self.calories > 0.0 {
            score += (self.protein * 4.0 / self.calories * 100.0).min(20.0);
        }
        score += (self.fiber * 2.0).min(15.0);
        if self.calories > 0.0 {
            score -= (self.sugar * 4.0 / self.calories * 50.0).min(25.0);
        }

        (score as i64).clamp(0, 100) as i32
    }
}

/// Missing or non-numeric values count as zero.
fn nutrient(item: &Value, key: &str) -> f64 {
    item.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

pub fn nutrition_health_score(items: &[Value]) -> i32 {
    if items.is_empty() {
        return BASE_SCORE as i32;
    }
    MacroTotals::from_items(items).health_score()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    fn totals(calories: f64, protein: f64, fiber: f64, sugar: f64) -> MacroTotals {
        MacroTotals {
            calories,
            protein,
            fiber,
            sugar,
        }
    }

    #[test]
    fn empty_plate_scores_the_base() {
        assert_eq!(nutrition_health_score(&[]), 50);
    }

    #[test]
    fn sums_items_and_ignores_non_numeric_values() {
        let items = vec![
            json!({"calories": 200, "protein": 10, "fiber": 2}),
            json!({"calories": 200, "protein": "lots", "sugar": 5}),
        ];
        // protein 40/400*100 = 10, fiber 4, sugar 20/400*50 = 2.5
        assert_eq!(nutrition_health_score(&items), 61);
    }

    #[test]
    fn bonuses_and_penalty_are_capped() {
        assert_eq!(totals(100.0, 1000.0, 1000.0, 0.0).health_score(), 85);
        assert_eq!(totals(100.0, 0.0, 0.0, 1000.0).health_score(), 25);
    }

    #[test]
    fn zero_calories_only_counts_fiber() {
        assert_eq!(totals(0.0, 30.0, 3.0, 30.0).health_score(), 56);
    }

    proptest! {
        #[test]
        fn score_stays_within_bounds(
            calories in 0.0f64..10_000.0,
            protein in 0.0f64..1_000.0,
            fiber in 0.0f64..1_000.0,
            sugar in 0.0f64..1_000.0,
        ) {
            let score = totals(calories, protein, fiber, sugar).health_score();
            prop_assert!((0..=100).contains(&score));
        }

        #[test]
        fn more_protein_never_lowers_the_score(
            calories in 0.0f64..10_000.0,
            protein in 0.0f64..1_000.0,
            extra in 0.0f64..1_000.0,
            fiber in 0.0f64..100.0,
            sugar in 0.0f64..1_000.0,
        ) {
            let lower = totals(calories, protein, fiber, sugar).health_score();
            let higher = totals(calories, protein + extra, fiber, sugar).health_score();
            prop_assert!(higher >= lower);
        }

        #[test]
        fn more_sugar_never_raises_the_score(
            calories in 0.0f64..10_000.0,
            protein in 0.0f64..1_000.0,
            fiber in 0.0f64..100.0,
            sugar in 0.0f64..1_000.0,
            extra in 0.0f64..1_000.0,
        ) {
            let lower_sugar = totals(calories, protein, fiber, sugar).health_score();
            let higher_sugar = totals(calories, protein, fiber, sugar + extra).health_score();
            prop_assert!(higher_sugar <= lower_sugar);
        }
    }
}
