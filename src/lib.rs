//! WolfStack landing page
//!
//! Renders the WolfStack portfolio page from a typed content model.
//!
//! - `content/`: content records, sample content, loaders and invariants
//! - `page/`: document tree, one builder per region, mount lifecycle
//! - `formatters/`: HTML document, Markdown and JSON output
//! - `config`, `site`: environment configuration and the on-disk build

pub mod error;
pub mod content;
pub mod page;
pub mod formatters;
pub mod config;
pub mod site;

// Re-export commonly used types
pub use error::{ContentError, Result};
pub use content::{sample, PageContent};
pub use page::{ContentPage, Element, Lifecycle, PageGenerator, Viewport};
pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
