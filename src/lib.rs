//! NutriCalc Library
//!
//! Food catalog, per-entry nutrition scaling and totals for a user-managed
//! list of foods.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod selection;
pub mod tools;
