//! Page Content Module
//!
//! Typed content model for the landing page, the WolfStack sample content,
//! loaders for alternative content files, and invariant checks.

pub mod types;
pub mod sample;
pub mod validate;

pub use types::*;
pub use sample::{sample, sample_with_asset_base, DEFAULT_ASSET_BASE};
pub use validate::{renumber_steps, REGION_ANCHORS};

use std::path::Path;

use crate::error::{ContentError, Result};

impl PageContent {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load content from a `.json` or `.toml` file, chosen by extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&raw),
            Some("toml") => Self::from_toml_str(&raw),
            other => Err(ContentError::config(format!(
                "unsupported content file extension {:?} for {}",
                other,
                path.display()
            ))),
        }
    }
}
