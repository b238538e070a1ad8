//! Markdown rendering of the page copy.
//!
//! Same content and order as the HTML page, one block per region joined
//! with `---` rules.

use crate::content::{ContactKind, Inline, PageContent, Paragraph};

pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn format(content: &PageContent) -> String {
        let sections = [
            hero(content),
            about(content),
            expertise(content),
            process(content),
            philosophy(content),
            contact(content),
            footer(content),
        ];

        let mut md = format!("# {}\n\n", content.brand.name);
        md.push_str(
            &content
                .nav
                .iter()
                .map(|l| format!("[{}]({})", l.label, l.href()))
                .collect::<Vec<_>>()
                .join(" · "),
        );
        for section in &sections {
            md.push_str("\n\n---\n\n");
            md.push_str(section);
        }
        md.push('\n');
        md
    }
}

fn paragraph(p: &Paragraph) -> String {
    p.inlines
        .iter()
        .map(|i| match i {
            Inline::Text(t) => t.clone(),
            Inline::Accent(t) => format!("**{}**", t),
        })
        .collect()
}

fn hero(content: &PageContent) -> String {
    let hero = &content.hero;
    format!(
        "*{}*\n\n## {}\n\n{}\n\n[{}]({}) · [{}]({})",
        hero.eyebrow,
        hero.heading_lines.join(" "),
        hero.subheading,
        hero.primary_cta.label,
        hero.primary_cta.href,
        hero.secondary_cta.label,
        hero.secondary_cta.href
    )
}

fn about(content: &PageContent) -> String {
    let about = &content.about;
    let mut lines = vec![format!("## {}", about.heading)];
    lines.extend(about.paragraphs.iter().map(paragraph));
    lines.push(
        about
            .stats
            .iter()
            .map(|s| format!("- **{}** {}", s.value, s.label))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    lines.join("\n\n")
}

fn expertise(content: &PageContent) -> String {
    let expertise = &content.expertise;
    let mut lines = vec![format!("## {}", expertise.heading)];
    for group in &expertise.groups {
        lines.push(format!("### {}", group.heading));
        lines.push(
            group
                .entries
                .iter()
                .map(|e| format!("- **{}**: {}", e.name, e.description))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }
    lines.join("\n\n")
}

fn process(content: &PageContent) -> String {
    let process = &content.process;
    let mut lines = vec![format!("## {}", process.heading), process.intro.clone()];
    for step in &process.steps {
        lines.push(format!("### {}. {}\n\n{}", step.ordinal, step.title, step.description));
    }
    lines.join("\n\n")
}

fn philosophy(content: &PageContent) -> String {
    let philosophy = &content.philosophy;
    let mut lines = vec![format!("## {}", philosophy.heading)];
    for p in &philosophy.principles {
        lines.push(format!("### {}\n\n{}", p.title, p.body));
    }
    lines.join("\n\n")
}

fn contact(content: &PageContent) -> String {
    let contact = &content.contact;
    let mut lines = vec![format!("## {}", contact.heading), contact.intro.clone()];
    lines.push(
        contact
            .methods
            .iter()
            .map(|m| match m.kind {
                ContactKind::Email => format!("- **{}**: <{}>", m.label, m.display_value),
                ContactKind::ExternalLink => {
                    format!("- **{}**: [{}]({})", m.label, m.display_value, m.target)
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
    );
    lines.push(format!(
        "[{}]({})",
        contact.primary_cta.label, contact.primary_cta.href
    ));
    lines.join("\n\n")
}

fn footer(content: &PageContent) -> String {
    let footer = &content.footer;
    format!("*{}*\n\n*{}*\n\n{}", footer.attribution, footer.motto, footer.copyright)
}
