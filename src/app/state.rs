use crate::config::AppConfig;
use crate::content::Page;
use crate::controls::carousel::Carousel;
use crate::controls::contact::{ContactForm, Field};
use crate::controls::faq::Accordion;
use crate::controls::header::HeaderTracker;
use crate::controls::menu::NavMenu;
use crate::controls::scroller::Scroller;
use crate::controls::timer::Countdown;
use crate::controls::LayoutMode;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    /// Browsing the page body: scrolling, carousel keys.
    Page,
    /// Selecting in the navigation bar / hamburger panel.
    Nav,
    /// Editing the contact form.
    Form,
}

/// Whole-application state: one controller per page feature, plus focus and
/// render bookkeeping. Controllers share nothing; they only meet here.
pub struct AppState {
    pub config: AppConfig,
    pub page: Page,

    pub carousel: Carousel,
    pub scroller: Scroller,
    pub header: HeaderTracker,
    pub faq: Accordion,
    pub contact: Option<ContactForm>,
    pub menu: NavMenu,

    /// Debounce for resize bursts; checked on tick.
    pub resize_debounce: Countdown,
    pub layout: LayoutMode,
    /// Terminal size (cols, rows), updated on resize events.
    pub viewport: (u16, u16),

    pub focus: FocusPanel,
    pub nav_selection: usize,
    /// Selected child inside the open dropdown, when navigating by keyboard.
    pub nav_child: Option<usize>,

    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, page: Page, viewport: (u16, u16), now: Instant) -> Self {
        let carousel = Carousel::new(
            page.slides.len(),
            page.indicators,
            Duration::from_millis(config.behavior.slide_interval_ms),
            now,
        );
        let faq = Accordion::new(page.faq.len());
        // Missing optional content disables the feature, never the app.
        let contact = page.contact.is_some().then(ContactForm::new);
        let menu = NavMenu::new(page.nav.len());
        let resize_debounce =
            Countdown::new(Duration::from_millis(config.behavior.resize_debounce_ms));
        let layout = LayoutMode::of(viewport.0, config.ui.breakpoint_cols);

        Self {
            config,
            page,
            carousel,
            scroller: Scroller::new(),
            header: HeaderTracker::new(),
            faq,
            contact,
            menu,
            resize_debounce,
            layout,
            viewport,
            focus: FocusPanel::Page,
            nav_selection: 0,
            nav_child: None,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    /// Feed the current scroll offset into the header tracker.
    pub fn apply_scroll(&mut self) {
        if self.header.observe(self.scroller.offset()) {
            self.dirty = true;
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Page => {
                if self.page.nav.is_empty() {
                    self.enter_form_or_page()
                } else {
                    FocusPanel::Nav
                }
            }
            FocusPanel::Nav => self.enter_form_or_page(),
            FocusPanel::Form => {
                if let Some(form) = &mut self.contact {
                    form.blur();
                }
                FocusPanel::Page
            }
        };
        self.dirty = true;
    }

    fn enter_form_or_page(&mut self) -> FocusPanel {
        match &mut self.contact {
            Some(form) => {
                if form.focus().is_none() {
                    form.set_focus(Field::Name);
                }
                FocusPanel::Form
            }
            None => FocusPanel::Page,
        }
    }

    pub fn scroll_step(&self) -> isize {
        self.config.behavior.scroll_step as isize
    }
}
