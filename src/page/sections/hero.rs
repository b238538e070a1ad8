//! Hero region: eyebrow, two-line heading, subheading and two calls to action.

use crate::content::{CallToAction, PageContent};
use crate::page::node::Element;

pub fn build(content: &PageContent) -> Element {
    let hero = &content.hero;

    let mut heading = Element::new("h1").class("hero-title");
    for (i, line) in hero.heading_lines.iter().enumerate() {
        if i > 0 {
            heading = heading.child(Element::new("br"));
        }
        heading = heading.text(line);
    }

    Element::new("section")
        .class("hero")
        .child(
            Element::new("div")
                .class("region-bg")
                .attr("style", hero.background.style()),
        )
        .child(
            Element::new("div").class("container").child(
                Element::new("div")
                    .class("hero-content")
                    .child(Element::new("span").class("eyebrow").text(&hero.eyebrow))
                    .child(heading)
                    .child(Element::new("p").class("hero-subtitle").text(&hero.subheading))
                    .child(
                        Element::new("div")
                            .class("hero-actions")
                            .child(cta_link(&hero.primary_cta, "cta-button"))
                            .child(cta_link(&hero.secondary_cta, "cta-button-secondary")),
                    ),
            ),
        )
        .child(
            Element::new("div")
                .class("scroll-indicator")
                .attr("aria-hidden", "true")
                .text("\u{2304}"),
        )
}

/// Anchor styled as a call-to-action button.
pub fn cta_link(cta: &CallToAction, class: &str) -> Element {
    Element::new("a")
        .class(class)
        .attr("href", &cta.href)
        .text(&cta.label)
}
