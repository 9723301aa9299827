//! Navigation bar rendering and hit-testing.
//!
//! Wide layout: one inline row of items. Narrow layout: a hamburger toggle
//! row, expanding into a vertical panel with the open dropdown's children
//! indented beneath their trigger. Row geometry is shared between `render`
//! and `hit` so clicks land where the pixels are.

use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const TOGGLE_LABEL: &str = "☰ Menu";
const ITEM_GAP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    /// The hamburger toggle control.
    Toggle,
    /// A top-level item (plain link or dropdown trigger).
    Item(usize),
    /// A child link inside an open dropdown.
    Child(usize, usize),
}

/// Rows of the expanded narrow-layout panel, in display order.
fn narrow_rows(state: &AppState) -> Vec<NavHit> {
    let mut rows = Vec::new();
    for (i, item) in state.page.nav.iter().enumerate() {
        rows.push(NavHit::Item(i));
        if state.menu.is_dropdown_open(i) {
            for j in 0..item.children.len() {
                rows.push(NavHit::Child(i, j));
            }
        }
    }
    rows
}

fn item_label(state: &AppState, index: usize) -> String {
    let item = &state.page.nav[index];
    if item.is_dropdown() {
        let marker = if state.menu.is_dropdown_open(index) {
            "▴"
        } else {
            "▾"
        };
        format!("{} {}", item.label, marker)
    } else {
        item.label.clone()
    }
}

/// Column spans of the wide-layout items, start inclusive, end exclusive.
fn wide_spans(state: &AppState) -> Vec<(u16, u16)> {
    let mut spans = Vec::new();
    let mut col = 1usize;
    for i in 0..state.page.nav.len() {
        let w = item_label(state, i).width();
        spans.push((col as u16, (col + w) as u16));
        col += w + ITEM_GAP;
    }
    spans
}

pub fn required_height(state: &AppState) -> u16 {
    if state.layout.is_narrow() {
        if state.menu.hamburger_open() {
            1 + narrow_rows(state).len() as u16
        } else {
            1
        }
    } else {
        1
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let nav_focused = state.focus == FocusPanel::Nav;
    let mut lines: Vec<Line> = Vec::new();

    if state.layout.is_narrow() {
        lines.push(Line::from(Span::styled(TOGGLE_LABEL, Theme::hamburger())));
        if state.menu.hamburger_open() {
            for row in narrow_rows(state) {
                lines.push(narrow_row_line(state, row, nav_focused));
            }
        }
    } else {
        let mut spans = vec![Span::raw(" ")];
        for (i, item) in state.page.nav.iter().enumerate() {
            let selected = nav_focused && state.nav_selection == i;
            let style = if selected {
                Theme::nav_selected()
            } else if item.is_dropdown() {
                Theme::nav_trigger()
            } else {
                Theme::nav_item()
            };
            spans.push(Span::styled(item_label(state, i), style));
            spans.push(Span::raw(" ".repeat(ITEM_GAP)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn narrow_row_line(state: &AppState, row: NavHit, nav_focused: bool) -> Line<'static> {
    match row {
        NavHit::Item(i) => {
            let selected = nav_focused && state.nav_selection == i && state.nav_child.is_none();
            let style = if selected {
                Theme::nav_selected()
            } else if state.page.nav[i].is_dropdown() {
                Theme::nav_trigger()
            } else {
                Theme::nav_item()
            };
            Line::from(Span::styled(format!("  {}", item_label(state, i)), style))
        }
        NavHit::Child(i, j) => {
            let selected =
                nav_focused && state.nav_selection == i && state.nav_child == Some(j);
            let style = if selected {
                Theme::nav_selected()
            } else {
                Theme::nav_child()
            };
            Line::from(Span::styled(
                format!("      · {}", state.page.nav[i].children[j].label),
                style,
            ))
        }
        NavHit::Toggle => Line::default(),
    }
}

/// Interactive nav target under terminal coordinates `(x, y)`, if any.
pub fn hit(state: &AppState, area: Rect, x: u16, y: u16) -> Option<NavHit> {
    if !area.contains(Position::new(x, y)) {
        return None;
    }
    let rx = x - area.x;
    let ry = y - area.y;

    if state.layout.is_narrow() {
        if ry == 0 {
            return (rx < TOGGLE_LABEL.width() as u16 + 1).then_some(NavHit::Toggle);
        }
        if state.menu.hamburger_open() {
            return narrow_rows(state).get(ry as usize - 1).copied();
        }
        None
    } else {
        if ry != 0 {
            return None;
        }
        wide_spans(state)
            .iter()
            .position(|&(start, end)| rx >= start && rx < end)
            .map(NavHit::Item)
    }
}
