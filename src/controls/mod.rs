//! Interactive page controllers.
//!
//! Each controller owns the transient state of one page feature (carousel,
//! scroll position, header mode, FAQ folds, contact form, navigation menus)
//! and exposes plain methods the event handler calls. Controllers never touch
//! the terminal; the renderer reads their state back out.

pub mod carousel;
pub mod contact;
pub mod faq;
pub mod header;
pub mod menu;
pub mod scroller;
pub mod timer;

/// Responsive layout mode, decided by terminal width.
///
/// Computed once per input event and passed into the controllers that care,
/// so tests can exercise both modes without a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// At or below the column breakpoint: hamburger menu, click-toggled dropdowns.
    Narrow,
    /// Above the breakpoint: inline nav bar, dropdown triggers act as links.
    Wide,
}

impl LayoutMode {
    pub fn of(width: u16, breakpoint: u16) -> Self {
        if width <= breakpoint {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == LayoutMode::Narrow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_breakpoint() {
        assert_eq!(LayoutMode::of(80, 100), LayoutMode::Narrow);
        assert_eq!(LayoutMode::of(100, 100), LayoutMode::Narrow);
        assert_eq!(LayoutMode::of(101, 100), LayoutMode::Wide);
    }
}
