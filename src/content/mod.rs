pub mod model;

use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

pub use model::{ContactSpec, FaqEntry, NavItem, NavLink, Page, Section, Slide};

/// Structural problems in a page file. Dangling anchors are deliberately not
/// listed here: an anchor with no matching section is tolerated at runtime
/// (the activation is consumed, nothing scrolls).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate section id `{0}`")]
    DuplicateSectionId(String),
    #[error("nav entry `{label}` has non-anchor target `{anchor}` (must start with `#`)")]
    BadAnchor { label: String, anchor: String },
    #[error("section id `{0}` collides with the built-in `{0}` anchor")]
    ReservedSectionId(String),
}

/// Anchor ids claimed by the FAQ and contact blocks.
const RESERVED_IDS: [&str; 2] = ["faq", "contact"];

/// Load a page from `path`, or the built-in sample page if `None`.
pub fn load_page(path: Option<&Path>) -> Result<Page> {
    let page = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read page from {}", path.display()))?;
            toml::from_str(&contents).with_context(|| "Failed to parse page file")?
        }
        None => Page::default(),
    };
    validate(&page)?;
    Ok(page)
}

pub fn validate(page: &Page) -> Result<(), ContentError> {
    let mut seen = std::collections::HashSet::new();
    for section in &page.sections {
        if RESERVED_IDS.contains(&section.id.as_str()) {
            return Err(ContentError::ReservedSectionId(section.id.clone()));
        }
        if !seen.insert(section.id.as_str()) {
            return Err(ContentError::DuplicateSectionId(section.id.clone()));
        }
    }

    for item in &page.nav {
        check_anchor(&item.label, &item.anchor)?;
        for child in &item.children {
            check_anchor(&child.label, &child.anchor)?;
        }
    }
    Ok(())
}

fn check_anchor(label: &str, anchor: &str) -> Result<(), ContentError> {
    if anchor.starts_with('#') {
        Ok(())
    } else {
        Err(ContentError::BadAnchor {
            label: label.to_string(),
            anchor: anchor.to_string(),
        })
    }
}
