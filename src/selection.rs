//! Food selection
//!
//! The ordered list of entries a user is editing, owned by one session.
//! Totals are never cached; every read recomputes them from the entries.

use crate::models::{EntryId, FoodEntry, FoodRecord, NutritionTotals};
use crate::nutrition::{aggregate, clamp_quantity};

/// Ordered, editable list of food entries
#[derive(Debug, Clone)]
pub struct FoodSelection {
    entries: Vec<FoodEntry>,
    /// Next id to hand out; only ever increases
    next_id: u64,
}

impl Default for FoodSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodSelection {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Append an empty entry and return its fresh id
    pub fn add_entry(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(FoodEntry::new(id));
        tracing::debug!(%id, count = self.entries.len(), "Entry added");
        id
    }

    /// Remove an entry; `None` if no entry has that id
    pub fn remove_entry(&mut self, id: EntryId) -> Option<FoodEntry> {
        let pos = self.position(id)?;
        let removed = self.entries.remove(pos);
        tracing::debug!(%id, count = self.entries.len(), "Entry removed");
        Some(removed)
    }

    /// Assign or clear the food of an entry, leaving its quantity unchanged
    pub fn set_entry_food(&mut self, id: EntryId, food: Option<FoodRecord>) -> Option<&FoodEntry> {
        let pos = self.position(id)?;
        let entry = &mut self.entries[pos];
        tracing::debug!(
            %id,
            food = food.as_ref().map(|f| f.name.as_str()).unwrap_or("<none>"),
            "Entry food set"
        );
        entry.food = food;
        Some(&*entry)
    }

    /// Clamp and store a quantity; returns the stored value
    pub fn set_entry_quantity(&mut self, id: EntryId, quantity: f64) -> Option<f64> {
        let pos = self.position(id)?;
        let clamped = clamp_quantity(quantity);
        if clamped != quantity {
            tracing::debug!(%id, requested = quantity, stored = clamped, "Quantity clamped");
        }
        self.entries[pos].quantity = clamped;
        Some(clamped)
    }

    /// Drop every entry; ids handed out so far stay retired
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        tracing::debug!(removed, "Selection cleared");
        removed
    }

    /// Current totals, recomputed from the entries
    pub fn totals(&self) -> NutritionTotals {
        aggregate(&self.entries)
    }

    pub fn get(&self, id: EntryId) -> Option<&FoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }
}
