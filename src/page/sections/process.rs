//! Process region: numbered steps, stacked vertically.
//!
//! A thin divider follows every step except the last, so a region with
//! `n` steps carries `n - 1` dividers.

use crate::content::{PageContent, ProcessStep};
use crate::page::node::Element;

pub const ANCHOR: &str = "process";

pub fn build(content: &PageContent) -> Element {
    let process = &content.process;
    let last = process.steps.len().saturating_sub(1);

    let mut steps = Element::new("div").class("process-steps");
    for (i, step) in process.steps.iter().enumerate() {
        steps = steps.child(process_step(step));
        if i < last {
            steps = steps.child(Element::new("div").class("divider-thin"));
        }
    }

    Element::new("section")
        .id(ANCHOR)
        .class("section-spacing")
        .child(
            Element::new("div")
                .class("container")
                .child(Element::new("h2").text(&process.heading))
                .child(Element::new("p").class("lead muted").text(&process.intro))
                .child(
                    Element::new("div")
                        .class("region-bg band")
                        .attr("style", process.background.style()),
                )
                .child(steps),
        )
}

fn process_step(step: &ProcessStep) -> Element {
    Element::new("div")
        .class("process-step")
        .child(
            Element::new("div")
                .class("step-ordinal")
                .child(Element::new("span").text(&step.ordinal)),
        )
        .child(
            Element::new("div")
                .class("step-body")
                .child(Element::new("h3").text(&step.title))
                .child(Element::new("p").class("muted").text(&step.description)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample;

    #[test]
    fn test_dividers_between_steps() {
        let mut content = sample();
        assert_eq!(build(&content).count_class("divider-thin"), 7);

        content.process.steps.truncate(1);
        assert_eq!(build(&content).count_class("divider-thin"), 0);

        content.process.steps.clear();
        let region = build(&content);
        assert_eq!(region.count_class("process-step"), 0);
        assert_eq!(region.count_class("divider-thin"), 0);
    }

    #[test]
    fn test_last_child_is_step() {
        let region = build(&sample());
        let steps = region.find_all_by_class("process-steps")[0];
        let last = steps.elements().last().unwrap();
        assert!(last.has_class("process-step"));
    }
}
