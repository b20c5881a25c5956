//! NutriCalc MCP Server Implementation
//!
//! Implements the MCP server with all NutriCalc tools. One service instance
//! owns one food selection.

use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::catalog::FoodCatalog;
use crate::selection::FoodSelection;
use crate::tools::entries;
use crate::tools::foods;
use crate::tools::status::StatusTracker;

/// NutriCalc MCP Service
#[derive(Clone)]
pub struct NutriCalcService {
    status_tracker: Arc<StatusTracker>,
    catalog: Arc<FoodCatalog>,
    /// The session's entry list; tool calls are applied one at a time
    selection: Arc<Mutex<FoodSelection>>,
    tool_router: ToolRouter<NutriCalcService>,
}

impl NutriCalcService {
    pub fn new(catalog: FoodCatalog) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            catalog: Arc::new(catalog),
            selection: Arc::new(Mutex::new(FoodSelection::new())),
            tool_router: Self::tool_router(),
        }
    }

    fn selection(&self) -> Result<MutexGuard<'_, FoodSelection>, McpError> {
        self.selection
            .lock()
            .map_err(|e| McpError::internal_error(format!("Selection lock poisoned: {}", e), None))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn entry_not_found(id: u64) -> Result<CallToolResult, McpError> {
    to_json(&serde_json::json!({ "error": "Entry not found", "id": id }))
}

// ============================================================================
// Food Catalog Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFoodsParams {
    /// Part of a food name (case-insensitive)
    pub query: String,
    /// Maximum results (default 20, max 100)
    #[serde(default = "default_search_limit")]
    pub limit: i64,
}

fn default_search_limit() -> i64 { 20 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFoodsParams {
    /// Maximum results (default 50, max 500)
    #[serde(default = "default_list_limit")]
    pub limit: i64,
    /// Offset for pagination (default 0)
    #[serde(default)]
    pub offset: i64,
}

fn default_list_limit() -> i64 { 50 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFoodParams {
    /// Exact catalog name
    pub name: String,
}

// ============================================================================
// Entry Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveEntryParams {
    /// Entry ID to remove
    pub id: u64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetEntryFoodParams {
    /// Entry ID to update
    pub id: u64,
    /// Exact catalog name, or null to clear the entry's food
    pub food_name: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetEntryQuantityParams {
    /// Entry ID to update
    pub id: u64,
    /// Quantity in grams; clamped to 0..=5000
    pub quantity: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutriCalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutriCalc service including build info, catalog size, and process information")]
    fn nutricalc_status(&self) -> Result<CallToolResult, McpError> {
        let entry_count = self.selection()?.len();
        let status = self.status_tracker.get_status(&self.catalog, entry_count);
        to_json(&status)
    }

    #[tool(description = "Get step-by-step instructions for building a food list and reading its nutrition totals. Call this when unsure how to use the calculator tools.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Food Catalog ---

    #[tool(description = "Search catalog foods by name (case-insensitive substring), sorted alphabetically")]
    fn search_foods(&self, Parameters(p): Parameters<SearchFoodsParams>) -> Result<CallToolResult, McpError> {
        to_json(&foods::search_foods(&self.catalog, &p.query, p.limit))
    }

    #[tool(description = "List catalog foods alphabetically with pagination")]
    fn list_foods(&self, Parameters(p): Parameters<ListFoodsParams>) -> Result<CallToolResult, McpError> {
        to_json(&foods::list_foods(&self.catalog, p.limit, p.offset))
    }

    #[tool(description = "Get a catalog food's nutrients per 100g by exact name")]
    fn get_food(&self, Parameters(p): Parameters<GetFoodParams>) -> Result<CallToolResult, McpError> {
        match foods::get_food(&self.catalog, &p.name) {
            Some(detail) => to_json(&detail),
            None => to_json(&serde_json::json!({ "error": "Food not found", "name": p.name })),
        }
    }

    // --- Entries ---

    #[tool(description = "Add an empty food entry (no food, 0 g) and return its id")]
    fn add_entry(&self) -> Result<CallToolResult, McpError> {
        let mut selection = self.selection()?;
        to_json(&entries::add_entry(&mut selection))
    }

    #[tool(description = "Remove a food entry by id")]
    fn remove_entry(&self, Parameters(p): Parameters<RemoveEntryParams>) -> Result<CallToolResult, McpError> {
        let mut selection = self.selection()?;
        match entries::remove_entry(&mut selection, p.id) {
            Some(resp) => to_json(&resp),
            None => entry_not_found(p.id),
        }
    }

    #[tool(description = "Select the catalog food for an entry by exact name, or pass null to clear it. Unknown or blank names are rejected. The quantity is kept.")]
    fn set_entry_food(&self, Parameters(p): Parameters<SetEntryFoodParams>) -> Result<CallToolResult, McpError> {
        let mut selection = self.selection()?;
        let result = entries::set_entry_food(&mut selection, &self.catalog, p.id, p.food_name.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        match result {
            Some(resp) => to_json(&resp),
            None => entry_not_found(p.id),
        }
    }

    #[tool(description = "Set an entry's quantity in grams (clamped to 0-5000)")]
    fn set_entry_quantity(&self, Parameters(p): Parameters<SetEntryQuantityParams>) -> Result<CallToolResult, McpError> {
        let mut selection = self.selection()?;
        match entries::set_entry_quantity(&mut selection, p.id, p.quantity) {
            Some(resp) => to_json(&resp),
            None => entry_not_found(p.id),
        }
    }

    #[tool(description = "Get every entry with its scaled nutrition, plus the totals")]
    fn get_selection(&self) -> Result<CallToolResult, McpError> {
        let selection = self.selection()?;
        to_json(&entries::get_selection(&selection))
    }

    #[tool(description = "Get the nutrition totals for all entries")]
    fn get_totals(&self) -> Result<CallToolResult, McpError> {
        let selection = self.selection()?;
        to_json(&entries::get_totals(&selection))
    }

    #[tool(description = "Remove all entries. Entry ids are not reused afterwards.")]
    fn clear_selection(&self) -> Result<CallToolResult, McpError> {
        let mut selection = self.selection()?;
        to_json(&entries::clear_selection(&mut selection))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutriCalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutricalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutriCalc".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutriCalc - compose a list of foods with quantities and read the nutrition totals. \
                 Call calculator_instructions first. \
                 Catalog: search_foods/list_foods/get_food. \
                 Entries: add_entry/remove_entry/set_entry_food/set_entry_quantity/clear_selection. \
                 Totals: get_selection/get_totals. Status: nutricalc_status."
                    .into(),
            ),
        }
    }
}
