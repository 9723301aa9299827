//! Responsive navigation menus: dropdowns and the hamburger panel.
//!
//! Both behaviors are gated on [`LayoutMode`]. On a narrow layout, dropdown
//! triggers are click-toggled with mutual exclusivity and the main nav
//! collapses behind a hamburger toggle whose open state is mirrored into an
//! `expanded` attribute. On a wide layout the triggers fall through to their
//! anchors and the menus stay out of the way.
//!
//! Resize handling is split: the hamburger closes the moment the layout goes
//! wide, while dropdowns close through a 250 ms debounce owned by the event
//! handler (see `app::handler`).

use crate::controls::LayoutMode;

/// What a dropdown-trigger activation turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Narrow layout: the dropdown toggled; default navigation suppressed.
    Toggled,
    /// Wide layout: the trigger keeps its default link behavior.
    Passthrough,
}

#[derive(Debug)]
pub struct NavMenu {
    dropdown_count: usize,
    open_dropdown: Option<usize>,
    hamburger_open: bool,
}

impl NavMenu {
    pub fn new(dropdown_count: usize) -> Self {
        Self {
            dropdown_count,
            open_dropdown: None,
            hamburger_open: false,
        }
    }

    pub fn open_dropdown(&self) -> Option<usize> {
        self.open_dropdown
    }

    pub fn is_dropdown_open(&self, index: usize) -> bool {
        self.open_dropdown == Some(index)
    }

    pub fn hamburger_open(&self) -> bool {
        self.hamburger_open
    }

    /// The `expanded` attribute mirrored onto the hamburger toggle control.
    pub fn expanded_attr(&self) -> &'static str {
        if self.hamburger_open {
            "true"
        } else {
            "false"
        }
    }

    /// Activation of dropdown trigger `index`.
    ///
    /// Narrow layout: close every other dropdown, then toggle this one, so at
    /// most one is ever open. The hamburger is left alone; the trigger is
    /// exempt from the link-closes-menu rule. Wide layout: untouched, the
    /// caller follows the trigger's anchor instead.
    pub fn click_trigger(&mut self, index: usize, layout: LayoutMode) -> TriggerOutcome {
        if !layout.is_narrow() {
            return TriggerOutcome::Passthrough;
        }
        if index < self.dropdown_count {
            let was_open = self.open_dropdown == Some(index);
            self.open_dropdown = if was_open { None } else { Some(index) };
        }
        TriggerOutcome::Toggled
    }

    /// Activation anywhere outside the nav structures. Narrow layout only:
    /// closes the open dropdown and the hamburger panel.
    pub fn click_outside(&mut self, layout: LayoutMode) -> bool {
        if !layout.is_narrow() {
            return false;
        }
        let changed = self.open_dropdown.is_some() || self.hamburger_open;
        self.open_dropdown = None;
        self.hamburger_open = false;
        changed
    }

    /// Activation of a nav link inside the menu. On narrow layouts a plain
    /// link closes the hamburger; a dropdown-trigger link does not (it has
    /// its own expand behavior).
    pub fn click_nav_link(&mut self, is_trigger: bool, layout: LayoutMode) {
        if layout.is_narrow() && !is_trigger {
            self.hamburger_open = false;
        }
    }

    pub fn toggle_hamburger(&mut self) {
        self.hamburger_open = !self.hamburger_open;
    }

    /// Immediate part of the resize-to-wide reset: force the hamburger
    /// closed. Runs on every resize event that lands on a wide layout,
    /// independent of the dropdown debounce.
    pub fn resize_wide(&mut self) -> bool {
        let changed = self.hamburger_open;
        self.hamburger_open = false;
        changed
    }

    /// Debounced part of the resize-to-wide reset: collapse all dropdowns
    /// and clear the exclusivity tracker.
    pub fn close_dropdowns(&mut self) -> bool {
        let changed = self.open_dropdown.is_some();
        self.open_dropdown = None;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::LayoutMode::{Narrow, Wide};

    #[test]
    fn test_dropdowns_are_mutually_exclusive() {
        let mut menu = NavMenu::new(2);
        assert_eq!(menu.click_trigger(0, Narrow), TriggerOutcome::Toggled);
        assert!(menu.is_dropdown_open(0));
        // Clicking B's trigger collapses A and expands B.
        menu.click_trigger(1, Narrow);
        assert!(!menu.is_dropdown_open(0));
        assert!(menu.is_dropdown_open(1));
        // Outside click collapses B.
        assert!(menu.click_outside(Narrow));
        assert_eq!(menu.open_dropdown(), None);
    }

    #[test]
    fn test_trigger_toggles_itself_closed() {
        let mut menu = NavMenu::new(1);
        menu.click_trigger(0, Narrow);
        menu.click_trigger(0, Narrow);
        assert_eq!(menu.open_dropdown(), None);
    }

    #[test]
    fn test_wide_layout_passes_trigger_through() {
        let mut menu = NavMenu::new(1);
        assert_eq!(menu.click_trigger(0, Wide), TriggerOutcome::Passthrough);
        assert_eq!(menu.open_dropdown(), None);
    }

    #[test]
    fn test_outside_click_is_narrow_only() {
        let mut menu = NavMenu::new(1);
        menu.click_trigger(0, Narrow);
        assert!(!menu.click_outside(Wide));
        assert!(menu.is_dropdown_open(0));
    }

    #[test]
    fn test_hamburger_toggle_mirrors_attr() {
        let mut menu = NavMenu::new(0);
        assert_eq!(menu.expanded_attr(), "false");
        menu.toggle_hamburger();
        assert!(menu.hamburger_open());
        assert_eq!(menu.expanded_attr(), "true");
        menu.toggle_hamburger();
        assert_eq!(menu.expanded_attr(), "false");
    }

    #[test]
    fn test_nav_link_closes_hamburger_except_trigger() {
        let mut menu = NavMenu::new(1);
        menu.toggle_hamburger();
        // A dropdown-trigger link must not close the open menu.
        menu.click_nav_link(true, Narrow);
        assert!(menu.hamburger_open());
        // A plain link does.
        menu.click_nav_link(false, Narrow);
        assert!(!menu.hamburger_open());
    }

    #[test]
    fn test_trigger_click_leaves_open_hamburger_alone() {
        let mut menu = NavMenu::new(1);
        menu.toggle_hamburger();
        menu.click_trigger(0, Narrow);
        assert!(menu.hamburger_open());
        assert!(menu.is_dropdown_open(0));
    }

    #[test]
    fn test_outside_click_closes_hamburger_too() {
        let mut menu = NavMenu::new(1);
        menu.toggle_hamburger();
        menu.click_trigger(0, Narrow);
        menu.click_outside(Narrow);
        assert!(!menu.hamburger_open());
        assert_eq!(menu.open_dropdown(), None);
        assert_eq!(menu.expanded_attr(), "false");
    }

    #[test]
    fn test_resize_wide_resets_hamburger_and_dropdowns() {
        let mut menu = NavMenu::new(1);
        menu.toggle_hamburger();
        menu.click_trigger(0, Narrow);
        assert!(menu.resize_wide());
        assert!(!menu.hamburger_open());
        assert_eq!(menu.expanded_attr(), "false");
        // Dropdown close arrives separately, after the debounce.
        assert!(menu.is_dropdown_open(0));
        assert!(menu.close_dropdowns());
        assert_eq!(menu.open_dropdown(), None);
    }
}
