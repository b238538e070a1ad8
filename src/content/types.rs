//! Content model for the landing page.
//!
//! Every record is immutable configuration supplied at render time. Ordered
//! sequences render in list order; there is no independent sort key.

use serde::{Deserialize, Serialize};

/// In-page navigation entry. `anchor_id` must name a rendered region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub anchor_id: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor_id)
    }
}

/// One numbered step of the process region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub ordinal: String, // "01".."08"
    pub title: String,
    pub description: String,
}

impl ProcessStep {
    /// Display ordinal for the step at `index` (zero-based).
    pub fn ordinal_for(index: usize) -> String {
        format!("{:02}", index + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactKind {
    Email,
    ExternalLink,
}

impl ContactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Email => "email",
            ContactKind::ExternalLink => "external-link",
        }
    }

    /// Icon used when a contact method names none.
    pub fn default_icon(&self) -> &'static str {
        match self {
            ContactKind::Email => "mail",
            ContactKind::ExternalLink => "external-link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub kind: ContactKind,
    pub label: String,
    pub display_value: String,
    pub target: String,
    /// Icon name, e.g. "github"; falls back to the kind's icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ContactMethod {
    pub fn icon_name(&self) -> &str {
        self.icon.as_deref().unwrap_or_else(|| self.kind.default_icon())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub heading: String,
    pub entries: Vec<SkillEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

/// Region background image. The path is opaque; serving it is not our concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub path: String,
    pub opacity: f32,
}

impl Background {
    /// Inline CSS for the region background. The path is emitted as a quoted
    /// CSS string, so spaces, `)` and `;` stay inside the `url()`.
    pub fn style(&self) -> String {
        format!(
            "background-image: url(\"{}\"); background-size: cover; background-position: center; opacity: {};",
            css_string_escape(&self.path),
            self.opacity
        )
    }
}

fn css_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\{:x} ", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Inline run of paragraph text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Accent(String),
}

impl Inline {
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Accent(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            inlines: vec![Inline::Text(text.into())],
        }
    }

    pub fn plain_text(&self) -> String {
        self.inlines.iter().map(Inline::as_str).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub eyebrow: String,
    pub heading_lines: Vec<String>,
    pub subheading: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
    pub background: Background,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<Paragraph>,
    pub stats: Vec<StatItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expertise {
    pub heading: String,
    pub background: Background,
    pub groups: Vec<SkillGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub heading: String,
    pub intro: String,
    pub background: Background,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Philosophy {
    pub heading: String,
    pub principles: Vec<Principle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub intro: String,
    pub methods: Vec<ContactMethod>,
    pub primary_cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub attribution: String,
    pub motto: String,
    pub copyright: String,
}

/// Complete content model for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    pub brand: Brand,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub about: About,
    pub expertise: Expertise,
    pub process: Process,
    pub philosophy: Philosophy,
    pub contact: Contact,
    pub footer: Footer,
}
