//! Food Entry MCP Tools
//!
//! Tools for editing the session's food selection. Every mutation answers
//! with the affected entry and freshly computed totals.

use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::models::{EntryId, FoodEntry, NutrientSet};
use crate::nutrition::entry_nutrition;
use crate::selection::FoodSelection;

/// Decimal places shown to the user
pub const DISPLAY_DECIMALS: u32 = 2;

/// One row as presented to the client
#[derive(Debug, Serialize)]
pub struct EntryView {
    pub id: EntryId,
    pub food: Option<String>,
    pub quantity: f64,
    /// Scaled nutrients, present once a food is selected
    pub nutrition: Option<NutrientSet>,
}

impl From<&FoodEntry> for EntryView {
    fn from(entry: &FoodEntry) -> Self {
        Self {
            id: entry.id,
            food: entry.food_name().map(str::to_string),
            quantity: entry.quantity,
            nutrition: entry_nutrition(entry).map(|n| n.rounded(DISPLAY_DECIMALS)),
        }
    }
}

/// Response for add_entry and the set_entry_* tools
#[derive(Debug, Serialize)]
pub struct EntryUpdateResponse {
    pub entry: EntryView,
    pub totals: NutrientSet,
}

/// Response for remove_entry
#[derive(Debug, Serialize)]
pub struct RemoveEntryResponse {
    pub success: bool,
    pub removed_id: EntryId,
    pub remaining: usize,
    pub totals: NutrientSet,
}

/// Response for get_totals
#[derive(Debug, Serialize)]
pub struct TotalsResponse {
    pub entry_count: usize,
    pub selected_count: usize,
    pub totals: NutrientSet,
}

/// Response for get_selection
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub entries: Vec<EntryView>,
    pub entry_count: usize,
    pub selected_count: usize,
    pub totals: NutrientSet,
}

/// Response for clear_selection
#[derive(Debug, Serialize)]
pub struct ClearSelectionResponse {
    pub success: bool,
    pub removed: usize,
    pub totals: NutrientSet,
}

fn display_totals(selection: &FoodSelection) -> NutrientSet {
    selection.totals().rounded(DISPLAY_DECIMALS)
}

fn selected_count(selection: &FoodSelection) -> usize {
    selection.entries().iter().filter(|e| e.food.is_some()).count()
}

/// Append an empty row
pub fn add_entry(selection: &mut FoodSelection) -> EntryUpdateResponse {
    let id = selection.add_entry();

    EntryUpdateResponse {
        entry: EntryView::from(&FoodEntry::new(id)),
        totals: display_totals(selection),
    }
}

/// Remove a row; `None` when the id is unknown
pub fn remove_entry(selection: &mut FoodSelection, id: u64) -> Option<RemoveEntryResponse> {
    let removed = selection.remove_entry(EntryId(id))?;
    Some(RemoveEntryResponse {
        success: true,
        removed_id: removed.id,
        remaining: selection.len(),
        totals: display_totals(selection),
    })
}

/// Select a catalog food for a row, or clear it with `None`
///
/// Unknown or blank food names are rejected without touching the selection.
pub fn set_entry_food(
    selection: &mut FoodSelection,
    catalog: &FoodCatalog,
    id: u64,
    food_name: Option<&str>,
) -> Result<Option<EntryUpdateResponse>, String> {
    let food = match food_name.map(str::trim) {
        Some(name) => match catalog.find(name) {
            Some(record) => Some(record.clone()),
            None => {
                tracing::warn!(food = name, "Food not found in catalog");
                return Err(format!("Food not found in catalog: {}", name));
            }
        },
        None => None,
    };

    let entry = match selection.set_entry_food(EntryId(id), food) {
        Some(entry) => EntryView::from(entry),
        None => return Ok(None),
    };

    Ok(Some(EntryUpdateResponse {
        entry,
        totals: display_totals(selection),
    }))
}

/// Set a row's quantity in grams (clamped to 0..=5000)
pub fn set_entry_quantity(
    selection: &mut FoodSelection,
    id: u64,
    quantity: f64,
) -> Option<EntryUpdateResponse> {
    let id = EntryId(id);
    selection.set_entry_quantity(id, quantity)?;
    let entry = selection.get(id).map(EntryView::from)?;

    Some(EntryUpdateResponse {
        entry,
        totals: display_totals(selection),
    })
}

/// Every row with its breakdown, plus totals
pub fn get_selection(selection: &FoodSelection) -> SelectionResponse {
    SelectionResponse {
        entries: selection.entries().iter().map(EntryView::from).collect(),
        entry_count: selection.len(),
        selected_count: selected_count(selection),
        totals: display_totals(selection),
    }
}

pub fn get_totals(selection: &FoodSelection) -> TotalsResponse {
    TotalsResponse {
        entry_count: selection.len(),
        selected_count: selected_count(selection),
        totals: display_totals(selection),
    }
}

/// Remove every row
pub fn clear_selection(selection: &mut FoodSelection) -> ClearSelectionResponse {
    let removed = selection.clear();
    ClearSelectionResponse {
        success: true,
        removed,
        totals: display_totals(selection),
    }
}
