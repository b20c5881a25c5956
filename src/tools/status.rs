//! NutriCalc Status Tool
//!
//! Provides runtime status information about the NutriCalc service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::catalog::FoodCatalog;
use crate::nutrition::{MAX_QUANTITY_G, MIN_QUANTITY_G};

/// Usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# NutriCalc Instructions

NutriCalc keeps one list of food entries for this session and totals their
nutrition: protein, carbohydrates, fat, saturated fat, calories (kcal),
fiber, sugar and salt. All other values are grams.

## Workflow

1. `search_foods` with part of a name to find the exact catalog name
   (or `list_foods` to browse alphabetically).
2. `add_entry` to create an empty row. Keep the returned `id`.
3. `set_entry_food` with the row `id` and the exact `food_name`.
   Pass `food_name: null` to clear the row's food.
4. `set_entry_quantity` with the row `id` and the amount in grams.
5. Read the `totals` returned by every call, or call `get_selection`
   for the per-row breakdown.
6. `remove_entry` deletes one row, `clear_selection` deletes all rows.

## Rules

- Catalog values are per 100 g. A row contributes
  `value * quantity / 100` for each nutrient.
- Quantities are clamped to 0..=5000 g; out-of-range input is not an error.
- Rows without a food contribute nothing to the totals.
- Row ids are never reused, even after removal or clearing.
- Displayed values are rounded to 2 decimals.
"#;

/// Status information for the NutriCalc service
#[derive(Debug, Serialize)]
pub struct NutriCalcStatus {
    pub build: BuildInfo,

    /// Catalog information
    pub catalog_source: String,
    pub catalog_foods: usize,

    /// Session information
    pub entry_count: usize,
    pub quantity_range_g: (f64, f64),

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, catalog: &FoodCatalog, entry_count: usize) -> NutriCalcStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutriCalcStatus {
            build: BuildInfo::current(),
            catalog_source: catalog.source().to_string(),
            catalog_foods: catalog.len(),
            entry_count,
            quantity_range_g: (MIN_QUANTITY_G, MAX_QUANTITY_G),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
