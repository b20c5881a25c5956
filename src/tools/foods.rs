//! Food Catalog MCP Tools
//!
//! Read-only tools over the static food catalog.

use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::models::{FoodRecord, NutrientSet};

/// Summary of a food for list/search results
#[derive(Debug, Serialize)]
pub struct FoodSummary {
    pub name: String,
    pub calories: f64,
}

impl From<&FoodRecord> for FoodSummary {
    fn from(record: &FoodRecord) -> Self {
        Self {
            name: record.name.clone(),
            calories: record.per_100g.calories,
        }
    }
}

/// Response for search_foods
#[derive(Debug, Serialize)]
pub struct SearchFoodsResponse {
    pub query: String,
    pub items: Vec<FoodSummary>,
    pub total: usize,
}

/// Response for list_foods
#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub items: Vec<FoodSummary>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// Full food detail response
#[derive(Debug, Serialize)]
pub struct FoodDetail {
    pub name: String,
    pub per_100g: NutrientSet,
}

/// Search foods by name, as the user types
pub fn search_foods(catalog: &FoodCatalog, query: &str, limit: i64) -> SearchFoodsResponse {
    let limit = limit.clamp(1, 100) as usize;
    let items: Vec<FoodSummary> = catalog
        .search(query, limit)
        .into_iter()
        .map(FoodSummary::from)
        .collect();

    SearchFoodsResponse {
        query: query.to_string(),
        total: items.len(),
        items,
    }
}

/// List foods in sorted order with pagination
pub fn list_foods(catalog: &FoodCatalog, limit: i64, offset: i64) -> ListFoodsResponse {
    let limit = limit.clamp(1, 500) as usize;
    let offset = offset.max(0) as usize;
    let items = catalog
        .sorted()
        .skip(offset)
        .take(limit)
        .map(FoodSummary::from)
        .collect();

    ListFoodsResponse {
        items,
        total: catalog.len(),
        limit,
        offset,
    }
}

/// Get a food's per-100g values by exact name
pub fn get_food(catalog: &FoodCatalog, name: &str) -> Option<FoodDetail> {
    catalog.find(name.trim()).map(|record| FoodDetail {
        name: record.name.clone(),
        per_100g: record.per_100g,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> FoodCatalog {
        FoodCatalog::from_json_str(
            r#"[
            {"name": "Rice", "protein": 2.7, "carbohydrates": 28, "fat": 0.3, "saturatedFat": 0.1,
             "calories": 130, "fiber": 0.4, "sugar": 0.1, "salt": 0.0},
            {"name": "Brown Rice", "protein": 2.6, "carbohydrates": 23, "fat": 0.9, "saturatedFat": 0.2,
             "calories": 112, "fiber": 1.8, "sugar": 0.4, "salt": 0.01},
            {"name": "Apple", "protein": 0.3, "carbohydrates": 13.8, "fat": 0.2, "saturatedFat": 0.0,
             "calories": 52, "fiber": 2.4, "sugar": 10.4, "salt": 0.0}
        ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_search_foods_limit_is_clamped() {
        let result = search_foods(&catalog(), "rice", 0);
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].name, "Brown Rice");

        let result = search_foods(&catalog(), "rice", 1000);
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_list_foods_paginates() {
        let result = list_foods(&catalog(), 2, 1);
        let names: Vec<&str> = result.items.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Brown Rice", "Rice"]);
        assert_eq!(result.total, 3);

        let result = list_foods(&catalog(), 10, -5);
        assert_eq!(result.offset, 0);
        assert_eq!(result.items.len(), 3);
    }

    #[test]
    fn test_get_food() {
        let detail = get_food(&catalog(), " Apple ").unwrap();
        assert_eq!(detail.per_100g.sugar, 10.4);
        assert!(get_food(&catalog(), "Pear").is_none());
    }
}
