//! Footer with static attribution text.

use crate::content::PageContent;
use crate::page::node::Element;

pub fn build(content: &PageContent) -> Element {
    let footer = &content.footer;

    Element::new("footer").class("site-footer").child(
        Element::new("div")
            .class("container footer-inner")
            .child(
                Element::new("div")
                    .child(Element::new("div").class("muted small").text(&footer.attribution))
                    .child(Element::new("div").class("faint tiny").text(&footer.motto)),
            )
            .child(Element::new("div").class("faint tiny").text(&footer.copyright)),
    )
}
