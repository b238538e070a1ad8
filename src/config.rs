//! Site generator configuration, read from environment variables.
//!
//! - `OUTPUT_DIR`: where rendered files go (default `dist`)
//! - `ASSET_BASE`: URL prefix of the background images (default `/images`)
//! - `CONTENT_FILE`: optional `.json`/`.toml` content override
//! - `FORMATS`: comma list of `html`, `md`, `json` (default `html`)

use std::path::PathBuf;

use crate::content::DEFAULT_ASSET_BASE;
use crate::error::{ContentError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(ContentError::config(format!("unknown output format '{}'", other))),
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Html => "index.html",
            OutputFormat::Markdown => "index.md",
            OutputFormat::Json => "content.json",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub output_dir: PathBuf,
    pub asset_base: String,
    pub content_file: Option<PathBuf>,
    pub formats: Vec<OutputFormat>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            content_file: None,
            formats: vec![OutputFormat::Html],
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let formats = match get("FORMATS") {
            Some(raw) => {
                let mut formats = Vec::new();
                for part in raw.split(',').filter(|p| !p.trim().is_empty()) {
                    let format = OutputFormat::parse(part)?;
                    if !formats.contains(&format) {
                        formats.push(format);
                    }
                }
                formats
            }
            None => defaults.formats,
        };

        Ok(Self {
            output_dir: get("OUTPUT_DIR").map(PathBuf::from).unwrap_or(defaults.output_dir),
            asset_base: get("ASSET_BASE").unwrap_or(defaults.asset_base),
            content_file: get("CONTENT_FILE").map(PathBuf::from),
            formats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("OUTPUT_DIR", "/tmp/site"),
            ("ASSET_BASE", "https://cdn.wolfstack.dev/img"),
            ("FORMATS", "html, md,json,html"),
            ("CONTENT_FILE", ""),
        ]))
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/site"));
        assert_eq!(config.asset_base, "https://cdn.wolfstack.dev/img");
        assert_eq!(
            config.formats,
            vec![OutputFormat::Html, OutputFormat::Markdown, OutputFormat::Json]
        );
        assert_eq!(config.content_file, None);
    }

    #[test]
    fn test_unknown_format() {
        let err = SiteConfig::from_lookup(lookup(&[("FORMATS", "html,pdf")])).unwrap_err();
        assert!(matches!(err, ContentError::Config { .. }));
    }
}
