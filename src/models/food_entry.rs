//! Food Entry model
//!
//! A user-added row pairing an optional food with a quantity in grams.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FoodRecord;

/// Session-unique entry identifier, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row in the food selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: EntryId,
    pub food: Option<FoodRecord>,
    /// Grams, always within the clamped range
    pub quantity: f64,
}

impl FoodEntry {
    /// A fresh row with nothing selected
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            food: None,
            quantity: 0.0,
        }
    }

    pub fn food_name(&self) -> Option<&str> {
        self.food.as_ref().map(|f| f.name.as_str())
    }
}
