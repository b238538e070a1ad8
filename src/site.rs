//! Render the page to disk.

use std::fs;
use std::path::PathBuf;

use crate::config::{OutputFormat, SiteConfig};
use crate::content::{self, PageContent};
use crate::error::Result;
use crate::formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
use crate::page::PageGenerator;

/// Load the configured content: the content file if set, else the sample.
pub fn load_content(config: &SiteConfig) -> Result<PageContent> {
    match &config.content_file {
        Some(path) => {
            tracing::info!("Loading content from {}", path.display());
            PageContent::from_path(path)
        }
        None => Ok(content::sample_with_asset_base(&config.asset_base)),
    }
}

/// Validate, render and write every configured format. Returns written paths.
pub fn build_site(config: &SiteConfig) -> Result<Vec<PathBuf>> {
    let content = load_content(config)?;
    content.validate()?;

    let page = PageGenerator::new().generate(&content);
    fs::create_dir_all(&config.output_dir)?;

    let mut written = Vec::with_capacity(config.formats.len());
    for format in &config.formats {
        let rendered = match format {
            OutputFormat::Html => HtmlFormatter::format(&content, &page)?,
            OutputFormat::Markdown => MarkdownFormatter::format(&content),
            OutputFormat::Json => JsonFormatter::format(&content)?,
        };

        let path = config.output_dir.join(format.file_name());
        fs::write(&path, &rendered)?;
        tracing::info!("  Saved: {} ({} bytes)", path.display(), rendered.len());
        written.push(path);
    }
    Ok(written)
}
