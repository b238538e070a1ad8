//! Page Integration Tests
//!
//! Renders the full WolfStack sample page and checks the document-level
//! properties: anchors, ordering, dividers, purity and the mount lifecycle.

use std::rc::Rc;

use wolfstack_site::content::{sample, ContactKind, StatItem, REGION_ANCHORS};
use wolfstack_site::page::{ContentPage, Element, Lifecycle, MemoryViewport, PageGenerator};
use wolfstack_site::HtmlFormatter;

fn render() -> Element {
    PageGenerator::new().generate(&sample())
}

#[test]
fn test_every_nav_anchor_exists_once() {
    let content = sample();
    let page = PageGenerator::new().generate(&content);

    for link in &content.nav {
        assert_eq!(
            page.count_id(&link.anchor_id),
            1,
            "anchor #{} should exist exactly once",
            link.anchor_id
        );
    }
    for anchor in REGION_ANCHORS {
        assert!(page.find_by_id(anchor).is_some());
    }
}

#[test]
fn test_process_ordinals_and_dividers() {
    let content = sample();
    for (i, step) in content.process.steps.iter().enumerate() {
        assert_eq!(step.ordinal, format!("{:02}", i + 1));
    }

    let page = PageGenerator::new().generate(&content);
    let process = page.find_by_id("process").unwrap();
    let steps = process.find_all_by_class("process-step");
    assert_eq!(steps.len(), content.process.steps.len());
    assert_eq!(
        process.count_class("divider-thin"),
        content.process.steps.len() - 1
    );

    let rendered: Vec<String> = steps
        .iter()
        .map(|s| s.find_all_by_class("step-ordinal")[0].text_content())
        .collect();
    let expected: Vec<String> = (1..=8).map(|n| format!("{:02}", n)).collect();
    assert_eq!(rendered, expected);
}

#[test]
fn test_rendering_is_idempotent() {
    let content = sample();
    let first = PageGenerator::new().generate(&content);
    let second = PageGenerator::new().generate(&content);
    assert_eq!(first, second);

    let html_a = HtmlFormatter::format(&content, &first).unwrap();
    let html_b = HtmlFormatter::format(&content, &second).unwrap();
    assert_eq!(html_a, html_b);
}

#[test]
fn test_expertise_groups_in_input_order() {
    let content = sample();
    let page = render();
    let expertise = page.find_by_id("expertise").unwrap();
    let groups = expertise.find_all_by_class("skill-group");
    assert_eq!(groups.len(), 4);

    for (group, expected) in groups.iter().zip(&content.expertise.groups) {
        let names: Vec<String> = group
            .find_all_by_class("skill-name")
            .iter()
            .map(|n| n.text_content())
            .collect();
        let expected_names: Vec<String> =
            expected.entries.iter().map(|e| e.name.clone()).collect();
        assert_eq!(names.len(), 3);
        assert_eq!(names, expected_names);
    }
}

#[test]
fn test_email_row_opens_mail_client() {
    let content = sample();
    assert_eq!(content.contact.methods.len(), 3);
    assert_eq!(content.contact.methods[0].kind, ContactKind::Email);

    let page = PageGenerator::new().generate(&content);
    let contact = page.find_by_id("contact").unwrap();
    let first = contact.find_all_by_class("contact-method")[0];
    assert_eq!(first.tag, "a");
    assert_eq!(first.get_attr("href"), Some("mailto:hello@wolfstack.dev"));
    assert_eq!(first.get_attr("target"), None);

    let html = HtmlFormatter::format(&content, &page).unwrap();
    assert!(html.contains("<a class=\"contact-method\" href=\"mailto:hello@wolfstack.dev\""));
}

#[test]
fn test_stats_render_literal_pairs_in_order() {
    let content = sample();
    let expected = vec![
        StatItem { value: "5+".to_string(), label: "Years Experience".to_string() },
        StatItem { value: "20+".to_string(), label: "Apps Shipped".to_string() },
        StatItem { value: "10M+".to_string(), label: "Users Reached".to_string() },
    ];
    assert_eq!(content.about.stats, expected);

    let page = render();
    let about = page.find_by_id("about").unwrap();
    let cells = about.find_all_by_class("stat");
    assert_eq!(cells.len(), 3);
    for (cell, stat) in cells.iter().zip(&expected) {
        assert_eq!(cell.find_all_by_class("stat-value")[0].text_content(), stat.value);
        assert_eq!(cell.find_all_by_class("stat-label")[0].text_content(), stat.label);
    }
}

#[test]
fn test_repeated_mount_cycles_do_not_leak() {
    let viewport = MemoryViewport::shared();
    let mut page = ContentPage::new(sample());

    for cycle in 1..=5 {
        page.mount(Rc::clone(&viewport));
        assert_eq!(page.lifecycle(), Lifecycle::Mounted);
        assert_eq!(viewport.borrow().active_subscriptions(), 1);

        viewport.borrow_mut().scroll_to(cycle as f64 * 100.0);
        assert_eq!(page.scroll_offset(), cycle as f64 * 100.0);

        page.unmount();
        assert_eq!(page.lifecycle(), Lifecycle::Unmounted);
        assert_eq!(viewport.borrow().active_subscriptions(), 0);
    }

    assert_eq!(viewport.borrow().subscribe_calls(), 5);
    assert_eq!(viewport.borrow().unsubscribe_calls(), 5);
}

#[test]
fn test_scroll_does_not_change_render() {
    let viewport = MemoryViewport::shared();
    let mut page = ContentPage::new(sample());
    let before = page.render();

    page.mount(Rc::clone(&viewport));
    viewport.borrow_mut().scroll_to(2400.0);
    assert_eq!(page.render(), before);
    page.unmount();
}

#[test]
fn test_two_pages_keep_separate_offsets() {
    let viewport = MemoryViewport::shared();
    let mut a = ContentPage::new(sample());
    let mut b = ContentPage::new(sample());

    a.mount(Rc::clone(&viewport));
    viewport.borrow_mut().scroll_to(10.0);
    b.mount(Rc::clone(&viewport));
    a.unmount();
    viewport.borrow_mut().scroll_to(20.0);

    assert_eq!(a.scroll_offset(), 10.0);
    assert_eq!(b.scroll_offset(), 20.0);
    b.unmount();
    assert_eq!(viewport.borrow().active_subscriptions(), 0);
}

#[test]
fn test_dropped_pages_release_subscriptions() {
    let viewport = MemoryViewport::shared();

    for _ in 0..3 {
        let mut page = ContentPage::new(sample());
        page.mount(Rc::clone(&viewport));
        viewport.borrow_mut().scroll_to(64.0);
        assert_eq!(page.scroll_offset(), 64.0);
    }

    assert_eq!(viewport.borrow().active_subscriptions(), 0);
}

#[test]
fn test_philosophy_and_footer_rendered() {
    let content = sample();
    let page = PageGenerator::new().generate(&content);

    let philosophy = page.find_all_by_class("philosophy");
    assert_eq!(philosophy.len(), 1);
    assert_eq!(philosophy[0].count_class("principle"), 4);

    let footer = page.elements().last().unwrap();
    assert_eq!(footer.tag, "footer");
    assert!(footer.text_content().contains(&content.footer.copyright));
}
