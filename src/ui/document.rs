//! The scrollable page body as a flat list of styled lines.
//!
//! Built fresh from the page content and controller state, so the renderer
//! and the mouse hit-testing in the event handler always agree on geometry.
//! Line indices are document coordinates; the render offset is applied when
//! the visible window is cut out.

use crate::app::state::{AppState, FocusPanel};
use crate::controls::contact::{ContactForm, Field};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Interactive target inside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocHitKind {
    PrevArrow,
    NextArrow,
    Indicator(usize),
    FaqQuestion(usize),
    FormField(Field),
    FormSubmit,
}

#[derive(Debug)]
struct DocHit {
    line: usize,
    /// Column range, start inclusive, end exclusive.
    cols: (u16, u16),
    kind: DocHitKind,
}

pub struct Document {
    pub lines: Vec<Line<'static>>,
    anchors: Vec<(String, usize)>,
    hits: Vec<DocHit>,
    width: u16,
}

impl Document {
    pub fn build(state: &AppState, width: u16) -> Self {
        let mut doc = Self {
            lines: Vec::new(),
            anchors: Vec::new(),
            hits: Vec::new(),
            width,
        };
        doc.push_hero(state);
        doc.push_sections(state);
        doc.push_faq(state);
        doc.push_contact(state);
        doc
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Resolve an in-page anchor to a document line. The bare `#` placeholder
    /// and unknown ids resolve to nothing; the caller simply does not scroll.
    pub fn anchor_target(&self, anchor: &str) -> Option<usize> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        if id.is_empty() {
            return None;
        }
        self.anchors
            .iter()
            .find(|(a, _)| a == id)
            .map(|(_, line)| *line)
    }

    /// Interactive target at a document line/column, if any.
    pub fn hit(&self, line: usize, col: u16) -> Option<DocHitKind> {
        self.hits
            .iter()
            .find(|h| h.line == line && col >= h.cols.0 && col < h.cols.1)
            .map(|h| h.kind)
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn anchor_here(&mut self, id: &str) {
        self.anchors.push((id.to_string(), self.lines.len()));
    }

    fn hit_here(&mut self, cols: (u16, u16), kind: DocHitKind) {
        self.hits.push(DocHit {
            line: self.lines.len(),
            cols,
            kind,
        });
    }

    fn centered(&mut self, text: String, style: Style) {
        let pad = (self.width as usize).saturating_sub(text.width()) / 2;
        self.lines.push(Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(text, style),
        ]));
    }

    /// Only the active slide is rendered; the rest stay off-screen until the
    /// carousel activates them.
    fn push_hero(&mut self, state: &AppState) {
        let Some(active) = state.carousel.active_slide() else {
            return;
        };
        let slide = &state.page.slides[active];
        let many = state.carousel.count() >= 2;

        self.blank();

        // Title row, flanked by prev/next arrows when there is anything to
        // cycle through.
        let title_width = slide.title.width();
        let pad = (self.width as usize).saturating_sub(title_width) / 2;
        let mut spans = Vec::new();
        if many {
            self.hit_here((0, 4), DocHitKind::PrevArrow);
            self.hit_here(
                (self.width.saturating_sub(4), self.width),
                DocHitKind::NextArrow,
            );
            spans.push(Span::styled(" ◀  ", Theme::arrow()));
            spans.push(Span::raw(" ".repeat(pad.saturating_sub(4))));
            spans.push(Span::styled(slide.title.clone(), Theme::slide_title()));
            let used = 4 + pad.saturating_sub(4) + title_width;
            spans.push(Span::raw(
                " ".repeat((self.width as usize).saturating_sub(used + 4)),
            ));
            spans.push(Span::styled("  ▶ ", Theme::arrow()));
        } else {
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(slide.title.clone(), Theme::slide_title()));
        }
        self.lines.push(Line::from(spans));

        for body_line in &slide.body {
            self.centered(body_line.clone(), Theme::slide_body());
        }

        if state.carousel.has_indicators() {
            let count = state.carousel.count();
            let dots_width = count * 2;
            let start = (self.width as usize).saturating_sub(dots_width) / 2;
            let mut spans = vec![Span::raw(" ".repeat(start))];
            for i in 0..count {
                let col = (start + i * 2) as u16;
                self.hit_here((col, col + 2), DocHitKind::Indicator(i));
                let active = state.carousel.active_indicator() == Some(i);
                spans.push(Span::styled(
                    if active { "● " } else { "○ " },
                    if active {
                        Theme::indicator_active()
                    } else {
                        Theme::indicator()
                    },
                ));
            }
            self.lines.push(Line::from(spans));
        }

        self.blank();
    }

    fn push_sections(&mut self, state: &AppState) {
        for section in &state.page.sections {
            self.anchor_here(&section.id);
            self.lines.push(Line::from(Span::styled(
                format!("── {} ──", section.heading),
                Theme::section_heading(),
            )));
            for body_line in &section.body {
                self.lines
                    .push(Line::from(Span::styled(body_line.clone(), Theme::body_text())));
            }
            self.blank();
        }
    }

    fn push_faq(&mut self, state: &AppState) {
        if state.page.faq.is_empty() {
            return;
        }
        self.anchor_here("faq");
        self.lines.push(Line::from(Span::styled(
            "── Frequently asked ──",
            Theme::section_heading(),
        )));
        for (i, entry) in state.page.faq.iter().enumerate() {
            let open = state.faq.is_open(i);
            // The fold marker turning over is the icon-rotation analog.
            let icon = if open { "▾" } else { "▸" };
            self.hit_here((0, self.width), DocHitKind::FaqQuestion(i));
            self.lines.push(Line::from(Span::styled(
                format!("{} {}", icon, entry.question),
                Theme::faq_question(),
            )));
            if open {
                for answer_line in &entry.answer {
                    self.lines.push(Line::from(Span::styled(
                        format!("    {}", answer_line),
                        Theme::faq_answer(),
                    )));
                }
            }
        }
        self.blank();
    }

    fn push_contact(&mut self, state: &AppState) {
        let (Some(spec), Some(form)) = (&state.page.contact, &state.contact) else {
            return;
        };
        self.anchor_here("contact");
        self.lines.push(Line::from(Span::styled(
            format!("── {} ──", spec.heading),
            Theme::section_heading(),
        )));
        if let Some(blurb) = &spec.blurb {
            self.lines
                .push(Line::from(Span::styled(blurb.clone(), Theme::body_text())));
        }
        self.blank();

        let form_focused = state.focus == FocusPanel::Form;
        for field in [Field::Name, Field::Email, Field::Message] {
            self.hit_here((0, self.width), DocHitKind::FormField(field));
            self.lines.push(field_line(form, field, form_focused));
        }

        self.blank();
        self.hit_here((2, 10), DocHitKind::FormSubmit);
        self.lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(" Send ▸ ", Theme::form_submit()),
        ]));

        if let Some(ack) = form.acknowledgment() {
            self.lines.push(Line::from(Span::styled(
                ack.to_string(),
                Theme::acknowledgment(),
            )));
        }
        self.blank();
    }
}

fn field_line(form: &ContactForm, field: Field, form_focused: bool) -> Line<'static> {
    let input = form.field(field);
    let focused = form_focused && form.focus() == Some(field);
    let mut spans = vec![Span::styled(
        format!("  {:<8} ", format!("{}:", field.label())),
        Theme::form_label(),
    )];
    if focused {
        let (before, after) = input.text.split_at(input.cursor);
        spans.push(Span::styled(before.to_string(), Theme::form_value_focused()));
        spans.push(Span::styled("▏", Theme::form_value_focused()));
        spans.push(Span::styled(after.to_string(), Theme::form_value_focused()));
    } else {
        spans.push(Span::styled(input.text.clone(), Theme::form_value()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::content::Page;
    use std::time::Instant;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), Page::default(), (80, 30), Instant::now())
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_anchor_targets_resolve() {
        let s = state();
        let doc = Document::build(&s, 80);
        assert!(doc.anchor_target("#services").is_some());
        assert!(doc.anchor_target("#faq").is_some());
        assert!(doc.anchor_target("#contact").is_some());
        // The placeholder and unknown ids resolve to nothing.
        assert_eq!(doc.anchor_target("#"), None);
        assert_eq!(doc.anchor_target("#no-such-id"), None);
    }

    #[test]
    fn test_anchor_lines_are_ordered() {
        let s = state();
        let doc = Document::build(&s, 80);
        let services = doc.anchor_target("#services").unwrap();
        let faq = doc.anchor_target("#faq").unwrap();
        let contact = doc.anchor_target("#contact").unwrap();
        assert!(services < faq && faq < contact);
        assert!(contact < doc.height());
    }

    #[test]
    fn test_only_active_slide_rendered() {
        let mut s = state();
        s.carousel.show_slide(1);
        let doc = Document::build(&s, 80);
        let all: String = doc.lines.iter().map(|l| line_text(l)).collect();
        assert!(all.contains(&s.page.slides[1].title));
        assert!(!all.contains(&s.page.slides[0].title));
    }

    #[test]
    fn test_indicator_hits_match_slide_count() {
        let s = state();
        let doc = Document::build(&s, 80);
        let dots: Vec<_> = doc
            .hits
            .iter()
            .filter(|h| matches!(h.kind, DocHitKind::Indicator(_)))
            .collect();
        assert_eq!(dots.len(), s.page.slides.len());
        // Clicking inside a dot's span resolves to that dot.
        let d1 = dots[1];
        assert_eq!(doc.hit(d1.line, d1.cols.0), Some(DocHitKind::Indicator(1)));
    }

    #[test]
    fn test_no_arrow_hits_with_single_slide() {
        let mut page = Page::default();
        page.slides.truncate(1);
        let s = AppState::new(AppConfig::default(), page, (80, 30), Instant::now());
        let doc = Document::build(&s, 80);
        assert!(!doc
            .hits
            .iter()
            .any(|h| matches!(h.kind, DocHitKind::PrevArrow | DocHitKind::NextArrow)));
    }

    #[test]
    fn test_open_faq_entry_adds_answer_lines() {
        let mut s = state();
        let closed = Document::build(&s, 80).height();
        s.faq.toggle(0);
        let open = Document::build(&s, 80).height();
        assert_eq!(open, closed + s.page.faq[0].answer.len());
    }

    #[test]
    fn test_faq_question_hit() {
        let s = state();
        let doc = Document::build(&s, 80);
        let q = doc
            .hits
            .iter()
            .find(|h| h.kind == DocHitKind::FaqQuestion(1))
            .unwrap();
        assert_eq!(doc.hit(q.line, 5), Some(DocHitKind::FaqQuestion(1)));
    }

    #[test]
    fn test_pageless_features_produce_no_hits() {
        let page: Page = toml::from_str("title = \"Bare\"").unwrap();
        let s = AppState::new(AppConfig::default(), page, (80, 30), Instant::now());
        let doc = Document::build(&s, 80);
        assert!(doc.hits.is_empty());
        assert_eq!(doc.anchor_target("#contact"), None);
    }
}
