//! Data models
//!
//! Reference foods, user entries and nutrient values.

mod food_entry;
mod food_record;
mod nutrition;

pub use food_entry::{EntryId, FoodEntry};
pub use food_record::FoodRecord;
pub use nutrition::{NutrientSet, NutritionTotals};
