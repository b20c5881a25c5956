//! Shared nutrient data structure
//!
//! Used for per-100g reference values, scaled entry values and totals.

use serde::{Deserialize, Serialize};

/// The eight tracked nutrients, all in grams except calories (kcal)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientSet {
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub saturated_fat: f64,
    pub calories: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub salt: f64,
}

/// Field-wise sum of nutrients across a selection
pub type NutritionTotals = NutrientSet;

impl NutrientSet {
    /// Create a new NutrientSet with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Apply `f` to every field
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self {
            protein: f(self.protein),
            carbohydrates: f(self.carbohydrates),
            fat: f(self.fat),
            saturated_fat: f(self.saturated_fat),
            calories: f(self.calories),
            fiber: f(self.fiber),
            sugar: f(self.sugar),
            salt: f(self.salt),
        }
    }

    /// Add another set to this one
    pub fn add(&self, other: &NutrientSet) -> Self {
        Self {
            protein: self.protein + other.protein,
            carbohydrates: self.carbohydrates + other.carbohydrates,
            fat: self.fat + other.fat,
            saturated_fat: self.saturated_fat + other.saturated_fat,
            calories: self.calories + other.calories,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
            salt: self.salt + other.salt,
        }
    }

    /// Round every field to `decimals` places for display
    pub fn rounded(&self, decimals: u32) -> Self {
        let factor = 10f64.powi(decimals as i32);
        self.map(|v| (v * factor).round() / factor)
    }

    /// Field names paired with their values, in display order
    pub fn fields(&self) -> [(&'static str, f64); 8] {
        [
            ("protein", self.protein),
            ("carbohydrates", self.carbohydrates),
            ("fat", self.fat),
            ("saturatedFat", self.saturated_fat),
            ("calories", self.calories),
            ("fiber", self.fiber),
            ("sugar", self.sugar),
            ("salt", self.salt),
        ]
    }

    pub fn is_zero(&self) -> bool {
        self.fields().iter().all(|(_, v)| *v == 0.0)
    }
}

impl std::ops::Add for NutrientSet {
    type Output = NutrientSet;

    fn add(self, other: NutrientSet) -> NutrientSet {
        NutrientSet::add(&self, &other)
    }
}

impl std::ops::AddAssign for NutrientSet {
    fn add_assign(&mut self, other: NutrientSet) {
        *self = NutrientSet::add(self, &other);
    }
}

impl std::iter::Sum for NutrientSet {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientSet::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NutrientSet {
        NutrientSet {
            protein: 1.0,
            carbohydrates: 2.0,
            fat: 3.0,
            saturated_fat: 4.0,
            calories: 5.0,
            fiber: 6.0,
            sugar: 7.0,
            salt: 8.0,
        }
    }

    #[test]
    fn test_zero_is_zero() {
        assert!(NutrientSet::zero().is_zero());
        assert!(!sample().is_zero());
    }

    #[test]
    fn test_add_is_field_wise() {
        let total = sample() + sample();
        assert_eq!(total.protein, 2.0);
        assert_eq!(total.saturated_fat, 8.0);
        assert_eq!(total.salt, 16.0);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: NutrientSet = Vec::<NutrientSet>::new().into_iter().sum();
        assert_eq!(total, NutrientSet::zero());
    }

    #[test]
    fn test_rounded_two_decimals() {
        let n = NutrientSet {
            calories: 123.456,
            salt: 0.125_1,
            ..NutrientSet::zero()
        };
        let r = n.rounded(2);
        assert_eq!(r.calories, 123.46);
        assert_eq!(r.salt, 0.13);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["saturatedFat"], 4.0);
        assert!(json.get("saturated_fat").is_none());
    }
}
