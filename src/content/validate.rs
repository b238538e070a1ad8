//! Content invariants checked before rendering.
//!
//! Rendering never fails, so a model that skips validation still renders:
//! a missing anchor is a dead link, a bad image path a lost background.

use std::collections::HashSet;

use url::Url;

use super::types::*;
use crate::error::{ContentError, Result};
use crate::page::sections::{about, contact, expertise, process};

/// Anchors the page renders as element ids, in document order.
pub const REGION_ANCHORS: &[&str] = &[about::ANCHOR, expertise::ANCHOR, process::ANCHOR, contact::ANCHOR];

pub const STAT_COUNT: usize = 3;
pub const PRINCIPLE_COUNT: usize = 4;

/// The hero's calls to action jump to the process and contact regions.
pub const HERO_PRIMARY_TARGET: &str = "#process";
pub const HERO_SECONDARY_TARGET: &str = "#contact";

impl PageContent {
    /// Check every content invariant, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        validate_nav(&self.nav)?;
        validate_steps(&self.process.steps)?;
        validate_contacts(&self.contact.methods)?;

        if self.about.stats.len() != STAT_COUNT {
            return Err(ContentError::validation(format!(
                "about region needs {} stats, found {}",
                STAT_COUNT,
                self.about.stats.len()
            )));
        }
        if self.philosophy.principles.len() != PRINCIPLE_COUNT {
            return Err(ContentError::validation(format!(
                "philosophy region needs {} principles, found {}",
                PRINCIPLE_COUNT,
                self.philosophy.principles.len()
            )));
        }

        for cta in [
            &self.hero.primary_cta,
            &self.hero.secondary_cta,
            &self.contact.primary_cta,
        ] {
            validate_href(&cta.href)?;
        }
        validate_cta_target("hero primary", &self.hero.primary_cta, HERO_PRIMARY_TARGET)?;
        validate_cta_target("hero secondary", &self.hero.secondary_cta, HERO_SECONDARY_TARGET)?;

        for (region, background) in [
            ("hero", &self.hero.background),
            ("expertise", &self.expertise.background),
            ("process", &self.process.background),
        ] {
            validate_background(region, background)?;
        }

        tracing::debug!(
            nav = self.nav.len(),
            steps = self.process.steps.len(),
            contacts = self.contact.methods.len(),
            "content validated"
        );
        Ok(())
    }
}

fn validate_nav(nav: &[NavLink]) -> Result<()> {
    let mut seen = HashSet::new();
    for link in nav {
        if link.anchor_id.is_empty() {
            return Err(ContentError::validation(format!(
                "nav link '{}' has an empty anchor",
                link.label
            )));
        }
        if !REGION_ANCHORS.contains(&link.anchor_id.as_str()) {
            return Err(ContentError::validation(format!(
                "nav link '{}' points at unknown anchor '#{}'",
                link.label, link.anchor_id
            )));
        }
        if !seen.insert(link.anchor_id.as_str()) {
            return Err(ContentError::validation(format!(
                "duplicate nav anchor '#{}'",
                link.anchor_id
            )));
        }
    }
    Ok(())
}

fn validate_steps(steps: &[ProcessStep]) -> Result<()> {
    for (i, step) in steps.iter().enumerate() {
        let expected = ProcessStep::ordinal_for(i);
        if step.ordinal != expected {
            return Err(ContentError::validation(format!(
                "process step '{}' has ordinal '{}', expected '{}'",
                step.title, step.ordinal, expected
            )));
        }
    }
    Ok(())
}

fn validate_contacts(methods: &[ContactMethod]) -> Result<()> {
    for method in methods {
        let url = Url::parse(&method.target).map_err(|e| {
            ContentError::validation(format!(
                "contact '{}' has malformed target '{}': {}",
                method.label, method.target, e
            ))
        })?;

        let scheme_ok = match method.kind {
            ContactKind::Email => url.scheme() == "mailto",
            ContactKind::ExternalLink => matches!(url.scheme(), "http" | "https"),
        };
        if !scheme_ok {
            return Err(ContentError::validation(format!(
                "contact '{}' of kind {:?} cannot use scheme '{}'",
                method.label,
                method.kind,
                url.scheme()
            )));
        }
    }
    Ok(())
}

fn validate_href(href: &str) -> Result<()> {
    if let Some(anchor) = href.strip_prefix('#') {
        if REGION_ANCHORS.contains(&anchor) {
            return Ok(());
        }
        return Err(ContentError::validation(format!(
            "call to action points at unknown anchor '{}'",
            href
        )));
    }
    Url::parse(href)
        .map(|_| ())
        .map_err(|e| ContentError::validation(format!("malformed link '{}': {}", href, e)))
}

fn validate_cta_target(role: &str, cta: &CallToAction, expected: &str) -> Result<()> {
    if cta.href != expected {
        return Err(ContentError::validation(format!(
            "{} call to action '{}' must link to '{}', found '{}'",
            role, cta.label, expected, cta.href
        )));
    }
    Ok(())
}

/// Background paths must resolve as URL references and opacity must be in `0..=1`.
fn validate_background(region: &str, background: &Background) -> Result<()> {
    if background.path.trim().is_empty() {
        return Err(ContentError::validation(format!(
            "{} background has an empty path",
            region
        )));
    }
    if background.path.chars().any(char::is_control) {
        return Err(ContentError::validation(format!(
            "{} background path contains control characters",
            region
        )));
    }

    let base = Url::parse("http://localhost/").map_err(|e| {
        ContentError::validation(format!("background base URL: {}", e))
    })?;
    base.join(&background.path).map_err(|e| {
        ContentError::validation(format!(
            "{} background path '{}' is not a valid URL reference: {}",
            region, background.path, e
        ))
    })?;

    if !(0.0..=1.0).contains(&background.opacity) {
        return Err(ContentError::validation(format!(
            "{} background opacity {} is outside 0..=1",
            region, background.opacity
        )));
    }
    Ok(())
}

/// Rewrite every ordinal from its position.
pub fn renumber_steps(steps: &mut [ProcessStep]) {
    for (i, step) in steps.iter_mut().enumerate() {
        step.ordinal = ProcessStep::ordinal_for(i);
    }
}
