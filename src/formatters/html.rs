//! HTML document output: askama shell around the serialised page tree.

use askama::Template;

use crate::content::PageContent;
use crate::error::Result;
use crate::page::node::{Element, Node};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Standalone document shell with the embedded stylesheet.
#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    lang: &'a str,
    title: &'a str,
    body: String,
}

/// HTML formatter for the page tree
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format the tree as a complete HTML5 document titled from `content`.
    pub fn format(content: &PageContent, page: &Element) -> Result<String> {
        let template = PageTemplate {
            lang: "en",
            title: &content.title,
            body: Self::fragment(page),
        };
        Ok(template.render()?)
    }

    /// Serialise one element and its descendants.
    pub fn fragment(el: &Element) -> String {
        let mut html = String::with_capacity(16 * 1024);
        write_element(el, &mut html);
        html
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out);
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag) {
        return;
    }

    for child in &el.children {
        match child {
            Node::Element(e) => write_element(e, out),
            Node::Text(t) => escape_into(t, out),
        }
    }

    out.push_str("</");
    out.push_str(el.tag);
    out.push('>');
    if el.tag != "a" && el.tag != "span" {
        out.push('\n');
    }
}

fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}
