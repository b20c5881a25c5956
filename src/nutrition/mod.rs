//! Nutrition calculation module
//!
//! Handles quantity clamping, per-entry scaling and totals aggregation.

pub mod calculator;

pub use calculator::{
    aggregate, clamp_quantity, entry_nutrition, scale, MAX_QUANTITY_G, MIN_QUANTITY_G,
    REFERENCE_GRAMS,
};
