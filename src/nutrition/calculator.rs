//! Nutrition scaling and aggregation
//!
//! Pure functions: a per-100g record scaled to a quantity in grams, and the
//! field-wise sum of scaled values over a selection.

use crate::models::{FoodEntry, FoodRecord, NutrientSet, NutritionTotals};

// ============================================================================
// Quantity Limits (grams)
// ============================================================================

/// Smallest accepted quantity
pub const MIN_QUANTITY_G: f64 = 0.0;
/// Largest accepted quantity
pub const MAX_QUANTITY_G: f64 = 5000.0;
/// Reference amount the catalog values are expressed for
pub const REFERENCE_GRAMS: f64 = 100.0;

/// Clamp a quantity into [MIN_QUANTITY_G, MAX_QUANTITY_G]
///
/// Out-of-range input is clamped, never rejected. NaN maps to the lower bound.
pub fn clamp_quantity(quantity: f64) -> f64 {
    if quantity.is_nan() {
        return MIN_QUANTITY_G;
    }
    quantity.clamp(MIN_QUANTITY_G, MAX_QUANTITY_G)
}

/// Scale a record's per-100g values to `quantity` grams
///
/// Each field is `value * quantity / 100`, evaluated in that order.
pub fn scale(record: &FoodRecord, quantity: f64) -> NutrientSet {
    let grams = clamp_quantity(quantity);
    record.per_100g.map(|v| v * grams / REFERENCE_GRAMS)
}

/// Scaled nutrients for one entry, `None` when no food is selected
pub fn entry_nutrition(entry: &FoodEntry) -> Option<NutrientSet> {
    entry.food.as_ref().map(|food| scale(food, entry.quantity))
}

/// Field-wise sum of every entry that has a food selected
pub fn aggregate<'a, I>(entries: I) -> NutritionTotals
where
    I: IntoIterator<Item = &'a FoodEntry>,
{
    entries.into_iter().filter_map(entry_nutrition).sum()
}
