use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn tagline() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }

    pub fn header_resting() -> Style {
        Style::default()
    }

    pub fn header_scrolled() -> Style {
        Style::default().bg(Color::Black).fg(Color::DarkGray)
    }

    pub fn header_scroll_up() -> Style {
        Style::default().bg(Color::Black).fg(Color::Cyan)
    }

    pub fn nav_item() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn nav_selected() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }

    pub fn nav_trigger() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn nav_child() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn hamburger() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn slide_title() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn slide_body() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn arrow() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn indicator_active() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn indicator() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn section_heading() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn body_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn faq_question() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn faq_answer() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn form_label() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn form_value() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn form_value_focused() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
    }

    pub fn form_submit() -> Style {
        Style::default().fg(Color::Black).bg(Color::Green)
    }

    pub fn acknowledgment() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_accent() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
