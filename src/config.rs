//! Runtime configuration
//!
//! Read from environment variables at startup.

use std::path::PathBuf;

/// Environment variable naming an alternative catalog file
pub const CATALOG_PATH_VAR: &str = "NUTRICALC_CATALOG_PATH";

/// Default log directive added on top of `RUST_LOG`
pub const DEFAULT_LOG_DIRECTIVE: &str = "nutricalc=info";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON catalog to load instead of the embedded one
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup(CATALOG_PATH_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self { catalog_path }
    }
}
