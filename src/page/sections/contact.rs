//! Contact region: clickable contact rows and a primary call to action.
//!
//! Email rows are plain `mailto:` links so the mail client opens in place.
//! External rows open a new browsing context without an opener.

use crate::content::{ContactKind, ContactMethod, PageContent};
use crate::page::node::Element;
use crate::page::sections::hero::cta_link;

pub const ANCHOR: &str = "contact";

pub fn build(content: &PageContent) -> Element {
    let contact = &content.contact;

    Element::new("section")
        .id(ANCHOR)
        .class("section-spacing")
        .child(
            Element::new("div")
                .class("container narrow")
                .child(Element::new("h2").text(&contact.heading))
                .child(Element::new("p").class("lead muted").text(&contact.intro))
                .child(
                    Element::new("div")
                        .class("contact-methods")
                        .children(contact.methods.iter().map(contact_row)),
                )
                .child(cta_link(&contact.primary_cta, "cta-button")),
        )
}

fn contact_row(method: &ContactMethod) -> Element {
    let row = Element::new("a")
        .class("contact-method")
        .attr("href", &method.target)
        .attr("data-kind", method.kind.as_str());

    let row = match method.kind {
        ContactKind::Email => row,
        ContactKind::ExternalLink => row
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer"),
    };

    row.child(
        Element::new("span")
            .class("contact-icon")
            .attr("data-icon", method.icon_name())
            .attr("aria-hidden", "true"),
    )
    .child(
        Element::new("div")
            .child(Element::new("div").class("contact-label").text(&method.label))
            .child(Element::new("div").class("contact-value").text(&method.display_value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample;

    #[test]
    fn test_row_targets() {
        let region = build(&sample());
        let rows = region.find_all_by_class("contact-method");
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].get_attr("href"), Some("mailto:hello@wolfstack.dev"));
        assert_eq!(rows[0].get_attr("target"), None);

        let icons: Vec<Option<&str>> = rows
            .iter()
            .map(|r| r.find_all_by_class("contact-icon")[0].get_attr("data-icon"))
            .collect();
        assert_eq!(icons, vec![Some("mail"), Some("github"), Some("linkedin")]);

        for row in &rows[1..] {
            assert_eq!(row.get_attr("target"), Some("_blank"));
            assert_eq!(row.get_attr("rel"), Some("noopener noreferrer"));
        }
    }
}
