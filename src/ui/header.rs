use crate::app::state::AppState;
use crate::controls::header::HeaderMode;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// The header's visual state tracks the scroll direction: compact and dim
/// while scrolling down, highlighted while scrolling back up, plain at rest.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mode_style = match state.header.mode() {
        HeaderMode::Resting => Theme::header_resting(),
        HeaderMode::Scrolled => Theme::header_scrolled(),
        HeaderMode::ScrollUp => Theme::header_scroll_up(),
    };

    let mut lines = vec![Line::from(Span::styled(
        format!(" {}", state.page.title),
        Theme::title(),
    ))];
    if let Some(tagline) = &state.page.tagline {
        lines.push(Line::from(Span::styled(
            format!(" {}", tagline),
            Theme::tagline(),
        )));
    }

    frame.render_widget(Paragraph::new(lines).style(mode_style), area);
}
