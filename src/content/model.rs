//! Brochure page content model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML page files. The
//! default page is a built-in sample so the application works with no file
//! at all. Every part of the page is optional; a missing part simply
//! disables the matching interactive feature.

use serde::{Deserialize, Serialize};

/// A complete brochure page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub slides: Vec<Slide>,
    /// Render indicator dots under the carousel. Dots always match the
    /// slide count; disabling this removes them entirely.
    #[serde(default = "default_true")]
    pub indicators: bool,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub contact: Option<ContactSpec>,
}

/// Top-level navigation entry. With children it renders as a dropdown and
/// its own anchor only applies on wide layouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    /// In-page anchor (`"#about"`). The bare `"#"` is a placeholder link.
    #[serde(default = "default_anchor")]
    pub anchor: String,
    #[serde(default)]
    pub children: Vec<NavLink>,
}

impl NavItem {
    pub fn is_dropdown(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    #[serde(default = "default_anchor")]
    pub anchor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Anchor id, referenced from nav entries as `#<id>`.
    pub id: String,
    pub heading: String,
    #[serde(default)]
    pub body: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    #[serde(default)]
    pub answer: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSpec {
    #[serde(default = "default_contact_heading")]
    pub heading: String,
    #[serde(default)]
    pub blurb: Option<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            title: "Harborview Studio".into(),
            tagline: Some("Design for small spaces".into()),
            nav: vec![
                NavItem {
                    label: "Home".into(),
                    anchor: "#".into(),
                    children: vec![],
                },
                NavItem {
                    label: "Services".into(),
                    anchor: "#services".into(),
                    children: vec![
                        NavLink {
                            label: "Interiors".into(),
                            anchor: "#services".into(),
                        },
                        NavLink {
                            label: "Renovation".into(),
                            anchor: "#process".into(),
                        },
                    ],
                },
                NavItem {
                    label: "About".into(),
                    anchor: "#about".into(),
                    children: vec![],
                },
                NavItem {
                    label: "FAQ".into(),
                    anchor: "#faq".into(),
                    children: vec![],
                },
                NavItem {
                    label: "Contact".into(),
                    anchor: "#contact".into(),
                    children: vec![],
                },
            ],
            slides: vec![
                Slide {
                    title: "Rooms that breathe".into(),
                    body: vec!["Light-first layouts for apartments under 60 m².".into()],
                },
                Slide {
                    title: "Built to last".into(),
                    body: vec!["Materials chosen for a decade, not a season.".into()],
                },
                Slide {
                    title: "Fixed-fee projects".into(),
                    body: vec!["One quote up front. No surprises at handover.".into()],
                },
            ],
            indicators: true,
            sections: vec![
                Section {
                    id: "services".into(),
                    heading: "Services".into(),
                    body: vec![
                        "Full interior design, from survey to styling.".into(),
                        "Renovation planning and on-site supervision.".into(),
                        "Furniture sourcing from regional workshops.".into(),
                    ],
                },
                Section {
                    id: "process".into(),
                    heading: "How we work".into(),
                    body: vec![
                        "A first visit, a fixed quote, three design rounds.".into(),
                        "You approve every milestone before we move on.".into(),
                    ],
                },
                Section {
                    id: "about".into(),
                    heading: "About the studio".into(),
                    body: vec![
                        "Four designers, one workshop, twelve years of small-space".into(),
                        "projects around the harbor district.".into(),
                    ],
                },
            ],
            faq: vec![
                FaqEntry {
                    question: "How long does a project take?".into(),
                    answer: vec!["Most apartments take eight to twelve weeks.".into()],
                },
                FaqEntry {
                    question: "Do you work outside the city?".into(),
                    answer: vec![
                        "Yes, within about two hours of travel.".into(),
                        "Remote-only consultations are also available.".into(),
                    ],
                },
                FaqEntry {
                    question: "Is the first visit free?".into(),
                    answer: vec!["The first visit and quote are always free.".into()],
                },
            ],
            contact: Some(ContactSpec {
                heading: default_contact_heading(),
                blurb: Some("Tell us about your space and we'll get back to you.".into()),
            }),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_anchor() -> String {
    "#".to_string()
}
fn default_contact_heading() -> String {
    "Get in touch".to_string()
}
