//! Philosophy region: four fixed statement blocks in a 2-column grid.

use crate::content::{PageContent, Principle};
use crate::page::node::Element;

pub fn build(content: &PageContent) -> Element {
    let philosophy = &content.philosophy;

    Element::new("section")
        .class("section-spacing philosophy")
        .child(
            Element::new("div")
                .class("container")
                .child(Element::new("h2").text(&philosophy.heading))
                .child(
                    Element::new("div")
                        .class("principle-grid")
                        .children(philosophy.principles.iter().map(principle)),
                ),
        )
}

fn principle(p: &Principle) -> Element {
    Element::new("div")
        .class("principle")
        .child(Element::new("h3").class("accent").text(&p.title))
        .child(Element::new("p").class("muted").text(&p.body))
}
