//! Food catalog storage
//!
//! Loads, validates and indexes the static list of reference foods.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::FoodRecord;

/// Catalog bundled with the binary
const EMBEDDED_CATALOG: &str = include_str!("../../data/foods.json");

/// Catalog error types
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog entry #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("Duplicate food name in catalog: {0}")]
    DuplicateName(String),

    #[error("Food '{name}' has invalid {field} value {value}")]
    InvalidNutrient {
        name: String,
        field: &'static str,
        value: f64,
    },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Where the catalog was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
    Inline,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Embedded => write!(f, "embedded"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Inline => write!(f, "inline"),
        }
    }
}

/// Read-only food catalog with O(1) name lookup
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    /// Records in sorted display order
    records: Vec<FoodRecord>,
    /// Name -> position in `records`
    index: HashMap<String, usize>,
    source: CatalogSource,
}

impl FoodCatalog {
    /// Build a catalog from records, validating names and nutrient values
    pub fn new(records: Vec<FoodRecord>, source: CatalogSource) -> CatalogResult<Self> {
        let mut records = records;
        for (i, record) in records.iter_mut().enumerate() {
            let trimmed = record.name.trim().to_string();
            if trimmed.is_empty() {
                return Err(CatalogError::EmptyName { index: i });
            }
            record.name = trimmed;
            if let Some((field, value)) = record.invalid_nutrient() {
                return Err(CatalogError::InvalidNutrient {
                    name: record.name.clone(),
                    field,
                    value,
                });
            }
        }

        // Case-insensitive order, ties broken by exact byte order
        records.sort_by_cached_key(|r| (r.name.to_lowercase(), r.name.clone()));

        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateName(record.name.clone()));
            }
        }

        tracing::info!(foods = records.len(), source = %source, "Food catalog loaded");

        Ok(Self {
            records,
            index,
            source,
        })
    }

    /// Parse a JSON array of flat food records
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Self::parse(json, CatalogSource::Inline)
    }

    /// Load a JSON catalog file
    pub fn from_path<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json, CatalogSource::File(path.to_path_buf()))
    }

    /// The catalog bundled at build time
    pub fn embedded() -> CatalogResult<Self> {
        Self::parse(EMBEDDED_CATALOG, CatalogSource::Embedded)
    }

    fn parse(json: &str, source: CatalogSource) -> CatalogResult<Self> {
        let records: Vec<FoodRecord> = serde_json::from_str(json)?;
        Self::new(records, source)
    }

    /// Exact name lookup
    pub fn find(&self, name: &str) -> Option<&FoodRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// All foods in lexicographic order
    pub fn sorted(&self) -> impl Iterator<Item = &FoodRecord> {
        self.records.iter()
    }

    /// Search-as-you-type: case-insensitive substring match, sorted, at most `limit`
    pub fn search(&self, query: &str, limit: usize) -> Vec<&FoodRecord> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "banana", "protein": 1.1, "carbohydrates": 22.8, "fat": 0.3, "saturatedFat": 0.1,
         "calories": 89, "fiber": 2.6, "sugar": 12.2, "salt": 0.0},
        {"name": "Apple", "protein": 0.3, "carbohydrates": 13.8, "fat": 0.2, "saturatedFat": 0.0,
         "calories": 52, "fiber": 2.4, "sugar": 10.4, "salt": 0.0},
        {"name": "Chicken Breast", "protein": 31, "carbohydrates": 0, "fat": 3.6, "saturatedFat": 1.0,
         "calories": 165, "fiber": 0, "sugar": 0, "salt": 0.18}
    ]"#;

    fn names(records: &[&FoodRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_sorted_listing_is_case_insensitive() {
        let catalog = FoodCatalog::from_json_str(SAMPLE).unwrap();
        let listed: Vec<&FoodRecord> = catalog.sorted().collect();
        assert_eq!(names(&listed), vec!["Apple", "banana", "Chicken Breast"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.source(), &CatalogSource::Inline);
    }

    #[test]
    fn test_sorted_listing_breaks_case_ties() {
        let json = r#"[
            {"name": "apple", "protein": 0, "carbohydrates": 0, "fat": 0, "saturatedFat": 0,
             "calories": 0, "fiber": 0, "sugar": 0, "salt": 0},
            {"name": "Apple", "protein": 0, "carbohydrates": 0, "fat": 0, "saturatedFat": 0,
             "calories": 0, "fiber": 0, "sugar": 0, "salt": 0},
            {"name": "APRICOT", "protein": 0, "carbohydrates": 0, "fat": 0, "saturatedFat": 0,
             "calories": 0, "fiber": 0, "sugar": 0, "salt": 0}
        ]"#;
        let catalog = FoodCatalog::from_json_str(json).unwrap();
        let listed: Vec<&FoodRecord> = catalog.sorted().collect();
        assert_eq!(names(&listed), vec!["Apple", "apple", "APRICOT"]);
        assert_eq!(catalog.find("apple").unwrap().name, "apple");
    }

    #[test]
    fn test_find_exact_name() {
        let catalog = FoodCatalog::from_json_str(SAMPLE).unwrap();
        let chicken = catalog.find("Chicken Breast").unwrap();
        assert_eq!(chicken.per_100g.calories, 165.0);
        assert!(catalog.find("chicken breast").is_none());
        assert!(catalog.find("Tofu").is_none());
    }

    #[test]
    fn test_search_substring() {
        let catalog = FoodCatalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(names(&catalog.search("AN", 10)), vec!["banana"]);
        assert_eq!(names(&catalog.search("e", 10)), vec!["Apple", "Chicken Breast"]);
        assert_eq!(catalog.search("", 2).len(), 2);
        assert!(catalog.search("zzz", 10).is_empty());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let json = r#"[
            {"name": "Egg", "protein": 13, "carbohydrates": 1, "fat": 10, "saturatedFat": 3,
             "calories": 143, "fiber": 0, "sugar": 0.4, "salt": 0.36},
            {"name": " Egg ", "protein": 13, "carbohydrates": 1, "fat": 10, "saturatedFat": 3,
             "calories": 143, "fiber": 0, "sugar": 0.4, "salt": 0.36}
        ]"#;
        let err = FoodCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(ref n) if n == "Egg"));
    }

    #[test]
    fn test_rejects_blank_name() {
        let json = r#"[{"name": "  ", "protein": 0, "carbohydrates": 0, "fat": 0, "saturatedFat": 0,
             "calories": 0, "fiber": 0, "sugar": 0, "salt": 0}]"#;
        let err = FoodCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName { index: 0 }));
    }

    #[test]
    fn test_rejects_negative_nutrient() {
        let json = r#"[{"name": "Odd", "protein": 0, "carbohydrates": 0, "fat": 0, "saturatedFat": 0,
             "calories": -5, "fiber": 0, "sugar": 0, "salt": 0}]"#;
        let err = FoodCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidNutrient { field: "calories", .. }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = FoodCatalog::from_json_str(r#"[{"name": "Half"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FoodCatalog::from_path("/nonexistent/foods.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = FoodCatalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.source(), &CatalogSource::Embedded);
        for record in catalog.sorted() {
            assert!(record.invalid_nutrient().is_none(), "{}", record.name);
        }
    }
}
