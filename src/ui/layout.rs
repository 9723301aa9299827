use crate::app::state::AppState;
use crate::ui::nav;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub nav: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

/// Vertical page chrome: header | nav | scrollable body | status bar.
/// The nav row grows when the hamburger panel is expanded, so the layout
/// depends on menu state.
pub fn compute_layout(area: Rect, state: &AppState) -> AppLayout {
    let header_height = if state.page.tagline.is_some() { 2 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(nav::required_height(state)),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        nav: chunks[1],
        body: chunks[2],
        status_bar: chunks[3],
    }
}
