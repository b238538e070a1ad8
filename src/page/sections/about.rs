//! About region: fixed paragraphs and the key stats strip.
//!
//! The stats render as a 3-column row, one cell per `StatItem`, in list order.

use crate::content::{Inline, PageContent, Paragraph, StatItem};
use crate::page::node::Element;

pub const ANCHOR: &str = "about";

pub fn build(content: &PageContent) -> Element {
    let about = &content.about;

    Element::new("section")
        .id(ANCHOR)
        .class("section-spacing")
        .child(
            Element::new("div")
                .class("container narrow")
                .child(Element::new("h2").text(&about.heading))
                .child(
                    Element::new("div")
                        .class("prose")
                        .children(about.paragraphs.iter().map(paragraph)),
                )
                .child(
                    Element::new("div")
                        .class("stats")
                        .children(about.stats.iter().map(stat_cell)),
                ),
        )
}

fn paragraph(p: &Paragraph) -> Element {
    p.inlines.iter().fold(Element::new("p"), |el, inline| match inline {
        Inline::Text(t) => el.text(t),
        Inline::Accent(t) => el.child(Element::new("span").class("accent").text(t)),
    })
}

fn stat_cell(stat: &StatItem) -> Element {
    Element::new("div")
        .class("stat")
        .child(Element::new("div").class("stat-value").text(&stat.value))
        .child(Element::new("div").class("stat-label").text(&stat.label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample;

    #[test]
    fn test_accent_span() {
        let about = build(&sample());
        let accents = about.find_all_by_class("accent");
        assert_eq!(accents.len(), 1);
        assert_eq!(accents[0].text_content(), "strong architecture beats quick fixes");
    }

    #[test]
    fn test_paragraph_count() {
        let about = build(&sample());
        let prose = about.find_all_by_class("prose")[0];
        assert_eq!(prose.elements().count(), 4);
    }
}
