mod document;
mod header;
pub mod layout;
pub mod nav;
mod status_bar;
mod theme;

pub use document::{DocHitKind, Document};
pub use nav::NavHit;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state);

    header::render(frame, app_layout.header, state);
    nav::render(frame, app_layout.nav, state);
    render_body(frame, app_layout.body, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState) {
    let doc = Document::build(state, area.width);
    let offset = state.scroller.offset().min(doc.height());
    let end = (offset + area.height as usize).min(doc.height());
    let visible: Vec<Line> = doc.lines[offset..end].to_vec();
    frame.render_widget(Paragraph::new(visible), area);
}
