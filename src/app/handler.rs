//! Event routing: terminal input, ticks, and resize handling.
//!
//! Each event is handled to completion before the next is taken off the
//! channel, so controller state never changes mid-handler. Mouse clicks are
//! hit-tested against the same geometry the renderer draws from.

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::{AppState, FocusPanel};
use crate::controls::contact::Field;
use crate::controls::menu::TriggerOutcome;
use crate::controls::LayoutMode;
use crate::ui::{self, DocHitKind, Document, NavHit};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    let actions = match event {
        AppEvent::Terminal(cevent) => {
            // Input acts against current geometry; the page may have changed
            // shape since the last input (FAQ folds, slide change).
            sync_scroll_bounds(state);
            match cevent {
                CEvent::Key(key) => {
                    state.dirty = true;
                    handle_key(state, key)
                }
                CEvent::Mouse(mouse) => handle_mouse(state, mouse),
                CEvent::Resize(w, h) => {
                    handle_resize(state, w, h);
                    vec![]
                }
                _ => vec![],
            }
        }
        AppEvent::Tick => handle_tick(state),
    };

    if state.dirty {
        sync_scroll_bounds(state);
    }
    actions
}

fn screen(state: &AppState) -> Rect {
    Rect::new(0, 0, state.viewport.0, state.viewport.1)
}

fn body_rect(state: &AppState) -> Rect {
    ui::layout::compute_layout(screen(state), state).body
}

/// Keep the scroller's range in step with the rendered page, whose height
/// moves with FAQ folds, the hamburger panel, and the active slide.
fn sync_scroll_bounds(state: &mut AppState) {
    let body = body_rect(state);
    let doc_height = Document::build(state, body.width).height();
    state
        .scroller
        .set_bounds(doc_height.saturating_sub(body.height as usize));
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    let now = Instant::now();

    if state.carousel.on_tick(now) {
        state.dirty = true;
    }

    if state.scroller.on_tick() {
        state.apply_scroll();
        state.dirty = true;
    }

    // The debounced half of resize handling: only the final resize in a
    // burst gets here, and it only acts if the layout ended up wide.
    if state.resize_debounce.fire(now) && state.layout == LayoutMode::Wide {
        if state.menu.close_dropdowns() {
            state.nav_child = None;
            state.dirty = true;
        }
    }

    vec![]
}

fn handle_resize(state: &mut AppState, width: u16, height: u16) {
    state.viewport = (width, height);
    let layout = LayoutMode::of(width, state.config.ui.breakpoint_cols);
    if layout != state.layout {
        debug!(width, height, ?layout, "layout mode changed");
    }
    state.layout = layout;

    // The hamburger resets the moment the layout goes wide; dropdowns wait
    // for the debounce checked on tick.
    if layout == LayoutMode::Wide {
        state.menu.resize_wide();
    }
    state.resize_debounce.arm(Instant::now());
    state.dirty = true;
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Esc => return handle_escape(state),
        KeyCode::Tab => {
            if state.focus == FocusPanel::Form {
                if let Some(form) = &mut state.contact {
                    form.focus_next();
                }
            } else {
                state.cycle_focus();
            }
            return vec![];
        }
        KeyCode::BackTab => {
            if state.focus == FocusPanel::Form {
                if let Some(form) = &mut state.contact {
                    form.focus_prev();
                }
            }
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Page => handle_page_key(state, key),
        FocusPanel::Nav => handle_nav_key(state, key),
        FocusPanel::Form => handle_form_key(state, key),
    }
}

fn handle_escape(state: &mut AppState) -> Vec<Action> {
    match state.focus {
        FocusPanel::Form => {
            if let Some(form) = &mut state.contact {
                form.blur();
            }
            state.focus = FocusPanel::Page;
            vec![]
        }
        FocusPanel::Nav => {
            state.focus = FocusPanel::Page;
            state.nav_child = None;
            vec![]
        }
        FocusPanel::Page => {
            // Close open menus first; only a bare Esc quits.
            if state.layout.is_narrow()
                && (state.menu.hamburger_open() || state.menu.open_dropdown().is_some())
            {
                state.menu.click_outside(state.layout);
                state.nav_child = None;
                vec![]
            } else {
                vec![Action::Quit]
            }
        }
    }
}

fn handle_page_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let now = Instant::now();
    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Left => state.carousel.prev(now),
        KeyCode::Right => state.carousel.next(now),
        KeyCode::Char(c @ '1'..='9') => {
            state.carousel.select(c as usize - '1' as usize, now);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroller.scroll_by(-state.scroll_step());
            state.apply_scroll();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroller.scroll_by(state.scroll_step());
            state.apply_scroll();
        }
        KeyCode::PageUp => {
            let page = body_rect(state).height as isize;
            state.scroller.scroll_by(-page);
            state.apply_scroll();
        }
        KeyCode::PageDown => {
            let page = body_rect(state).height as isize;
            state.scroller.scroll_by(page);
            state.apply_scroll();
        }
        KeyCode::Home => {
            state.scroller.jump_to(0);
            state.apply_scroll();
        }
        KeyCode::End => {
            state.scroller.jump_to(usize::MAX);
            state.apply_scroll();
        }
        KeyCode::Char('m') if state.layout.is_narrow() => {
            state.menu.toggle_hamburger();
        }
        _ => {}
    }
    vec![]
}

fn handle_nav_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = state.page.nav.len();
    if len == 0 {
        state.focus = FocusPanel::Page;
        return vec![];
    }
    match key.code {
        KeyCode::Left => {
            state.nav_selection = (state.nav_selection + len - 1) % len;
            state.nav_child = None;
        }
        KeyCode::Right => {
            state.nav_selection = (state.nav_selection + 1) % len;
            state.nav_child = None;
        }
        KeyCode::Down => {
            if state.menu.is_dropdown_open(state.nav_selection) {
                let children = state.page.nav[state.nav_selection].children.len();
                state.nav_child = Some(match state.nav_child {
                    Some(j) => (j + 1).min(children - 1),
                    None => 0,
                });
            }
        }
        KeyCode::Up => {
            state.nav_child = match state.nav_child {
                Some(0) | None => None,
                Some(j) => Some(j - 1),
            };
        }
        KeyCode::Enter => return activate_nav(state),
        _ => {}
    }
    vec![]
}

/// Activate the selected nav target, keyboard and mouse alike.
///
/// A dropdown trigger toggles on narrow layouts and falls through to its
/// anchor on wide ones. A plain link counts as a click outside all dropdowns
/// (closing them, and the hamburger, on narrow) before following its anchor.
/// A dropdown child closes the hamburger but leaves its dropdown alone.
fn activate_nav(state: &mut AppState) -> Vec<Action> {
    let layout = state.layout;
    let Some(item) = state.page.nav.get(state.nav_selection) else {
        return vec![];
    };
    let is_dropdown = item.is_dropdown();
    let item_anchor = item.anchor.clone();
    let child_anchor = state
        .nav_child
        .and_then(|j| item.children.get(j))
        .map(|c| c.anchor.clone());

    if let Some(anchor) = child_anchor {
        state.menu.click_nav_link(false, layout);
        state.nav_child = None;
        follow_anchor(state, &anchor);
    } else if is_dropdown {
        match state.menu.click_trigger(state.nav_selection, layout) {
            TriggerOutcome::Toggled => state.nav_child = None,
            TriggerOutcome::Passthrough => follow_anchor(state, &item_anchor),
        }
    } else {
        state.menu.click_outside(layout);
        state.menu.click_nav_link(false, layout);
        state.nav_child = None;
        follow_anchor(state, &item_anchor);
    }
    vec![]
}

/// Begin smooth travel to an in-page anchor. The bare `#` placeholder and
/// unknown ids scroll nowhere; the activation is still consumed.
fn follow_anchor(state: &mut AppState, anchor: &str) {
    let body = body_rect(state);
    let doc = Document::build(state, body.width);
    if let Some(target) = doc.anchor_target(anchor) {
        state.scroller.travel_to(target);
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(form) = state.contact.as_mut() else {
        state.focus = FocusPanel::Page;
        return vec![];
    };
    match key.code {
        KeyCode::Enter => {
            if form.focus() == Some(Field::Message) {
                let submission = form.submit();
                return vec![Action::SubmitContact(submission)];
            }
            form.focus_next();
        }
        KeyCode::Up => form.focus_prev(),
        KeyCode::Down => form.focus_next(),
        KeyCode::Backspace => {
            if let Some(input) = form.focused_field_mut() {
                input.delete_back();
            }
        }
        KeyCode::Left => {
            if let Some(input) = form.focused_field_mut() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_field_mut() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_field_mut() {
                input.move_home();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_field_mut() {
                input.move_end();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = form.focused_field_mut() {
                input.insert_char(c);
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.scroller.scroll_by(-state.scroll_step());
            state.apply_scroll();
            state.dirty = true;
            vec![]
        }
        MouseEventKind::ScrollDown => {
            state.scroller.scroll_by(state.scroll_step());
            state.apply_scroll();
            state.dirty = true;
            vec![]
        }
        MouseEventKind::Down(MouseButton::Left) => {
            state.dirty = true;
            handle_click(state, mouse.column, mouse.row)
        }
        _ => vec![],
    }
}

fn handle_click(state: &mut AppState, x: u16, y: u16) -> Vec<Action> {
    let layout = state.layout;
    let now = Instant::now();
    let app_layout = ui::layout::compute_layout(screen(state), state);

    // Nav targets manage the menus themselves.
    if let Some(hit) = ui::nav::hit(state, app_layout.nav, x, y) {
        match hit {
            // The toggle stops propagation: no outside-dismissal runs.
            NavHit::Toggle => state.menu.toggle_hamburger(),
            NavHit::Item(i) => {
                state.nav_selection = i;
                state.nav_child = None;
                return activate_nav(state);
            }
            NavHit::Child(i, j) => {
                state.nav_selection = i;
                state.nav_child = Some(j);
                return activate_nav(state);
            }
        }
        return vec![];
    }

    // Anywhere else is outside the nav structures.
    if state.menu.click_outside(layout) {
        state.nav_child = None;
    }

    let body = app_layout.body;
    if body.contains(Position::new(x, y)) {
        let doc = Document::build(state, body.width);
        let line = state.scroller.offset() + (y - body.y) as usize;
        match doc.hit(line, x - body.x) {
            Some(DocHitKind::PrevArrow) => state.carousel.prev(now),
            Some(DocHitKind::NextArrow) => state.carousel.next(now),
            Some(DocHitKind::Indicator(i)) => state.carousel.select(i, now),
            Some(DocHitKind::FaqQuestion(i)) => state.faq.toggle(i),
            Some(DocHitKind::FormField(field)) => {
                if let Some(form) = &mut state.contact {
                    form.set_focus(field);
                    state.focus = FocusPanel::Form;
                }
            }
            Some(DocHitKind::FormSubmit) => {
                if let Some(form) = &mut state.contact {
                    return vec![Action::SubmitContact(form.submit())];
                }
            }
            None => {}
        }
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::content::{Page, Section};
    use crate::controls::header::HeaderMode;
    use std::time::Duration;

    fn narrow_state() -> AppState {
        AppState::new(AppConfig::default(), Page::default(), (80, 30), Instant::now())
    }

    /// A page tall enough that every scroll step actually moves.
    fn tall_state() -> AppState {
        let mut page = Page::default();
        page.sections.push(Section {
            id: "archive".into(),
            heading: "Archive".into(),
            body: (0..80).map(|i| format!("entry {}", i)).collect(),
        });
        AppState::new(AppConfig::default(), page, (80, 30), Instant::now())
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_quit_key() {
        let mut state = narrow_state();
        let actions = handle_event(&mut state, key(KeyCode::Char('q')));
        assert!(matches!(actions[..], [Action::Quit]));
    }

    #[test]
    fn test_carousel_keys() {
        let mut state = narrow_state();
        handle_event(&mut state, key(KeyCode::Right));
        assert_eq!(state.carousel.active_slide(), Some(1));
        handle_event(&mut state, key(KeyCode::Left));
        assert_eq!(state.carousel.active_slide(), Some(0));
        handle_event(&mut state, key(KeyCode::Left));
        assert_eq!(state.carousel.active_slide(), Some(2));
        handle_event(&mut state, key(KeyCode::Char('2')));
        assert_eq!(state.carousel.active_slide(), Some(1));
    }

    #[test]
    fn test_scrolling_drives_header_mode() {
        let mut state = tall_state();
        handle_event(&mut state, key(KeyCode::Down));
        handle_event(&mut state, key(KeyCode::Down));
        assert_eq!(state.header.mode(), HeaderMode::Scrolled);
        handle_event(&mut state, key(KeyCode::Up));
        assert_eq!(state.header.mode(), HeaderMode::ScrollUp);
        handle_event(&mut state, key(KeyCode::Home));
        assert_eq!(state.header.mode(), HeaderMode::Resting);
    }

    #[test]
    fn test_wheel_scroll() {
        let mut state = tall_state();
        let wheel = AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        }));
        handle_event(&mut state, wheel);
        assert_eq!(state.scroller.offset(), 3);
        assert_eq!(state.header.mode(), HeaderMode::Scrolled);
    }

    #[test]
    fn test_resize_to_wide_forces_menus_closed() {
        let mut state = narrow_state();
        state.menu.toggle_hamburger();
        state.menu.click_trigger(1, LayoutMode::Narrow);
        assert_eq!(state.menu.expanded_attr(), "true");

        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(140, 40)));
        assert_eq!(state.layout, LayoutMode::Wide);
        // Hamburger resets immediately; the dropdown waits for the debounce.
        assert!(!state.menu.hamburger_open());
        assert_eq!(state.menu.expanded_attr(), "false");
        assert!(state.menu.is_dropdown_open(1));

        // Pretend the quiet period has passed.
        state
            .resize_debounce
            .arm(Instant::now() - Duration::from_millis(300));
        handle_event(&mut state, AppEvent::Tick);
        assert_eq!(state.menu.open_dropdown(), None);
    }

    #[test]
    fn test_resize_staying_narrow_leaves_menus_alone() {
        let mut state = narrow_state();
        state.menu.toggle_hamburger();
        state.menu.click_trigger(1, LayoutMode::Narrow);

        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(70, 24)));
        state
            .resize_debounce
            .arm(Instant::now() - Duration::from_millis(300));
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.menu.hamburger_open());
        assert!(state.menu.is_dropdown_open(1));
    }

    #[test]
    fn test_escape_closes_menus_before_quitting() {
        let mut state = narrow_state();
        handle_event(&mut state, key(KeyCode::Char('m')));
        assert!(state.menu.hamburger_open());

        let actions = handle_event(&mut state, key(KeyCode::Esc));
        assert!(actions.is_empty());
        assert!(!state.menu.hamburger_open());

        let actions = handle_event(&mut state, key(KeyCode::Esc));
        assert!(matches!(actions[..], [Action::Quit]));
    }

    #[test]
    fn test_nav_enter_travels_to_section() {
        let mut state = narrow_state();
        handle_event(&mut state, key(KeyCode::Tab));
        assert_eq!(state.focus, FocusPanel::Nav);
        // Select "About" and activate it.
        handle_event(&mut state, key(KeyCode::Right));
        handle_event(&mut state, key(KeyCode::Right));
        handle_event(&mut state, key(KeyCode::Enter));
        assert!(state.scroller.is_travelling());
    }

    #[test]
    fn test_placeholder_anchor_scrolls_nowhere() {
        let mut state = narrow_state();
        handle_event(&mut state, key(KeyCode::Tab));
        // "Home" carries the bare `#` placeholder.
        handle_event(&mut state, key(KeyCode::Enter));
        assert!(!state.scroller.is_travelling());
        assert_eq!(state.scroller.offset(), 0);
    }

    #[test]
    fn test_nav_trigger_enter_toggles_dropdown_on_narrow() {
        let mut state = narrow_state();
        handle_event(&mut state, key(KeyCode::Char('m')));
        handle_event(&mut state, key(KeyCode::Tab));
        handle_event(&mut state, key(KeyCode::Right));
        handle_event(&mut state, key(KeyCode::Enter));
        assert!(state.menu.is_dropdown_open(1));
        // The trigger leaves the hamburger open.
        assert!(state.menu.hamburger_open());
        // A plain link closes both.
        handle_event(&mut state, key(KeyCode::Right));
        handle_event(&mut state, key(KeyCode::Enter));
        assert!(!state.menu.hamburger_open());
        assert_eq!(state.menu.open_dropdown(), None);
    }

    #[test]
    fn test_form_flow_submits_and_resets() {
        let mut state = narrow_state();
        handle_event(&mut state, key(KeyCode::Tab));
        handle_event(&mut state, key(KeyCode::Tab));
        assert_eq!(state.focus, FocusPanel::Form);

        handle_event(&mut state, key(KeyCode::Char('A')));
        handle_event(&mut state, key(KeyCode::Enter));
        handle_event(&mut state, key(KeyCode::Char('a')));
        handle_event(&mut state, key(KeyCode::Char('@')));
        handle_event(&mut state, key(KeyCode::Char('b')));
        handle_event(&mut state, key(KeyCode::Enter));
        handle_event(&mut state, key(KeyCode::Char('h')));
        handle_event(&mut state, key(KeyCode::Char('i')));
        let actions = handle_event(&mut state, key(KeyCode::Enter));

        match &actions[..] {
            [Action::SubmitContact(sub)] => {
                assert_eq!(sub.name, "A");
                assert_eq!(sub.email, "a@b");
                assert_eq!(sub.message, "hi");
            }
            other => panic!("expected SubmitContact, got {:?}", other),
        }
        let form = state.contact.as_ref().unwrap();
        assert!(form.name.text.is_empty());
        assert!(form.acknowledgment().is_some());
    }

    #[test]
    fn test_click_outside_closes_open_menus() {
        let mut state = narrow_state();
        state.menu.toggle_hamburger();
        state.menu.click_trigger(1, LayoutMode::Narrow);
        // A click in the body, away from any target, dismisses both.
        let click = AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 70,
            row: 28,
            modifiers: KeyModifiers::NONE,
        }));
        handle_event(&mut state, click);
        assert!(!state.menu.hamburger_open());
        assert_eq!(state.menu.open_dropdown(), None);
    }
}
