//! Expertise region: skill groups in a 2-column grid.

use crate::content::{PageContent, SkillEntry, SkillGroup};
use crate::page::node::Element;

pub const ANCHOR: &str = "expertise";

pub fn build(content: &PageContent) -> Element {
    let expertise = &content.expertise;

    Element::new("section")
        .id(ANCHOR)
        .class("section-spacing")
        .child(
            Element::new("div")
                .class("container")
                .child(Element::new("h2").text(&expertise.heading))
                .child(
                    Element::new("div")
                        .class("region-bg band")
                        .attr("style", expertise.background.style()),
                )
                .child(
                    Element::new("div")
                        .class("skill-grid")
                        .children(expertise.groups.iter().map(skill_group)),
                ),
        )
}

fn skill_group(group: &SkillGroup) -> Element {
    Element::new("div")
        .class("skill-group")
        .child(Element::new("h3").class("accent").text(&group.heading))
        .child(
            Element::new("div")
                .class("skill-list")
                .children(group.entries.iter().map(skill_entry)),
        )
}

fn skill_entry(entry: &SkillEntry) -> Element {
    Element::new("div")
        .class("skill")
        .child(Element::new("div").class("skill-name").text(&entry.name))
        .child(Element::new("p").class("muted").text(&entry.description))
}
