//! NutriCalc
//!
//! An MCP server exposing a single nutrition calculator session.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutricalc::build_info;
use nutricalc::catalog::FoodCatalog;
use nutricalc::config::{Config, DEFAULT_LOG_DIRECTIVE};
use nutricalc::mcp::NutriCalcService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the MCP stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env();

    let catalog = match &config.catalog_path {
        Some(path) => {
            eprintln!("Catalog path: {}", path.display());
            FoodCatalog::from_path(path)?
        }
        None => FoodCatalog::embedded()?,
    };
    eprintln!("Catalog foods: {}", catalog.len());

    eprintln!("Starting MCP server on stdio...");
    let service = NutriCalcService::new(catalog);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
