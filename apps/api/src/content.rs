//! Portfolio content loading.
//!
//! The served content is a static JSON document. A default copy is compiled
//! into the binary; `CONTENT_PATH` points at an override file for serving a
//! different portfolio without rebuilding.

use anyhow::{Context, Result};

use crate::models::PortfolioContent;

/// The compiled-in portfolio document.
const DEFAULT_CONTENT: &str = include_str!("../content/portfolio.json");

impl PortfolioContent {
    /// Parses the compiled-in default document.
    pub fn builtin() -> Result<Self> {
        serde_json::from_str(DEFAULT_CONTENT).context("Built-in portfolio content is invalid")
    }

    /// Loads content from an override file, or the built-in document when no
    /// path is configured.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read content file '{p}'"))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Content file '{p}' is not valid portfolio JSON"))
            }
            None => Self::builtin(),
        }
    }
}
