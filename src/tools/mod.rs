//! NutriCalc Tools module
//!
//! MCP tool implementations for the nutrition calculator.

pub mod entries;
pub mod foods;
pub mod status;
