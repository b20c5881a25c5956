//! Food Record model
//!
//! Static per-100g reference data for a named food.

use serde::{Deserialize, Serialize};

use super::NutrientSet;

/// A catalog food with nutrients per 100 grams
///
/// Serialized flat, e.g. `{"name": "Oats", "protein": 13.2, ..., "salt": 0.01}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    #[serde(flatten)]
    pub per_100g: NutrientSet,
}

impl FoodRecord {
    pub fn new(name: impl Into<String>, per_100g: NutrientSet) -> Self {
        Self {
            name: name.into(),
            per_100g,
        }
    }

    /// First nutrient that is negative or not finite, if any
    pub fn invalid_nutrient(&self) -> Option<(&'static str, f64)> {
        self.per_100g
            .fields()
            .into_iter()
            .find(|(_, v)| !v.is_finite() || *v < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flat_record() {
        let json = r#"{
            "name": "Chicken Breast",
            "protein": 20, "carbohydrates": 0, "fat": 5, "saturatedFat": 1,
            "calories": 120, "fiber": 0, "sugar": 0, "salt": 0.1
        }"#;
        let record: FoodRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Chicken Breast");
        assert_eq!(record.per_100g.protein, 20.0);
        assert_eq!(record.per_100g.saturated_fat, 1.0);
        assert_eq!(record.per_100g.salt, 0.1);
    }

    #[test]
    fn test_invalid_nutrient() {
        let ok = FoodRecord::new("Water", NutrientSet::zero());
        assert_eq!(ok.invalid_nutrient(), None);

        let bad = FoodRecord::new(
            "Broken",
            NutrientSet {
                sugar: -1.0,
                ..NutrientSet::zero()
            },
        );
        assert_eq!(bad.invalid_nutrient(), Some(("sugar", -1.0)));

        let nan = FoodRecord::new(
            "Nan",
            NutrientSet {
                fat: f64::NAN,
                ..NutrientSet::zero()
            },
        );
        assert_eq!(nan.invalid_nutrient().map(|(f, _)| f), Some("fat"));
    }
}
