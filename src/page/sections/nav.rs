//! Fixed top navigation bar.

use crate::content::{NavLink, PageContent};
use crate::page::node::Element;

pub fn build(content: &PageContent) -> Element {
    Element::new("nav")
        .class("site-nav")
        .child(
            Element::new("div")
                .class("container nav-inner")
                .child(Element::new("div").class("brand").text(&content.brand.name))
                .child(
                    Element::new("div")
                        .class("nav-links")
                        .children(content.nav.iter().map(nav_link)),
                ),
        )
}

fn nav_link(link: &NavLink) -> Element {
    Element::new("a")
        .class("nav-link")
        .attr("href", link.href())
        .text(&link.label)
}
