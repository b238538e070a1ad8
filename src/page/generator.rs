//! Page Generator
//!
//! Assembles the navigation bar and every region into one document tree.
//! Regions appear in a fixed order separated by steel dividers.
//!
//! Public API (consumed by `ContentPage`, the formatters and `generate_site`):
//! - PageGenerator::new() -> Self
//! - PageGenerator::generate(content) -> Element

use crate::content::PageContent;
use crate::page::node::Element;
use crate::page::sections::{about, contact, expertise, footer, hero, nav, philosophy, process};

/// Page generator - stateless, pure tree builder.
pub struct PageGenerator;

impl PageGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Build the complete document tree for `content`.
    ///
    /// The result depends only on `content`: no clock, no randomness, so two
    /// calls with the same input compare equal.
    pub fn generate(&self, content: &PageContent) -> Element {
        let regions = [
            hero::build(content),
            about::build(content),
            expertise::build(content),
            process::build(content),
            philosophy::build(content),
            contact::build(content),
            footer::build(content),
        ];

        let mut page = Element::new("div").class("page").child(nav::build(content));
        for (i, region) in regions.into_iter().enumerate() {
            if i > 0 {
                page = page.child(Element::new("div").class("steel-divider"));
            }
            page = page.child(region);
        }

        tracing::debug!(
            elements = page.descendants().len(),
            "page tree generated"
        );
        page
    }
}

impl Default for PageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample;

    #[test]
    fn test_region_order() {
        let page = PageGenerator::new().generate(&sample());
        let tags: Vec<&str> = page
            .elements()
            .filter(|e| !e.has_class("steel-divider"))
            .map(|e| e.tag)
            .collect();
        assert_eq!(
            tags,
            vec!["nav", "section", "section", "section", "section", "section", "section", "footer"]
        );
    }

    #[test]
    fn test_steel_dividers_between_regions() {
        let page = PageGenerator::new().generate(&sample());
        assert_eq!(page.count_class("steel-divider"), 6);
    }

    #[test]
    fn test_generate_is_pure() {
        let generator = PageGenerator::new();
        let content = sample();
        assert_eq!(generator.generate(&content), generator.generate(&content));
    }
}
