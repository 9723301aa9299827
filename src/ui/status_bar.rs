use crate::app::state::{AppState, FocusPanel};
use crate::controls::header::HeaderMode;
use crate::controls::LayoutMode;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let hint = match state.status_message.as_deref() {
        Some(msg) => msg.to_string(),
        None => match state.focus {
            FocusPanel::Page => "q quit | tab focus | ←/→ slides | ↑/↓ scroll".to_string(),
            FocusPanel::Nav => "←/→ select | enter open | esc back".to_string(),
            FocusPanel::Form => "enter next/send | esc back".to_string(),
        },
    };
    parts.push(Span::styled(format!(" {} ", hint), Theme::status_bar()));

    let mut right = String::new();
    if let Some(active) = state.carousel.active_slide() {
        right.push_str(&format!(" {}/{} ", active + 1, state.carousel.count()));
    }
    right.push_str(match state.header.mode() {
        HeaderMode::Resting => " top ",
        HeaderMode::Scrolled => " ↓ ",
        HeaderMode::ScrollUp => " ↑ ",
    });
    match state.layout {
        LayoutMode::Narrow => {
            right.push_str(&format!(" narrow expanded={} ", state.menu.expanded_attr()));
        }
        LayoutMode::Wide => right.push_str(" wide "),
    }

    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(right, Theme::status_accent()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
