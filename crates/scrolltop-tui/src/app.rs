use std::rc::Rc;
use std::sync::Arc;

use ratatui::layout::Rect;
use scrolltop_core::catalog::{self, CategoryGroup};
use scrolltop_core::env::local::{LocalScheduler, LocalViewport, SystemClock};
use scrolltop_core::{AppConfig, Counter, Environment, ScrollToTop, Viewport};
use tracing::debug;

use crate::theme::Theme;
use crate::widgets::home;

/// Page shown in the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Counter,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Counter => "Counter",
        }
    }

    fn next(&self) -> Self {
        match self {
            Page::Home => Page::Counter,
            Page::Counter => Page::Home,
        }
    }
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Active color theme
    pub theme: Theme,
    /// Current page
    pub page: Page,
    /// Current application mode
    pub mode: Mode,
    /// Counter tool state
    pub counter: Counter,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Rows available to the content area, updated on draw
    pub viewport_height: u16,
    /// Where the scroll-to-top button was last drawn
    pub button_area: Option<Rect>,
    viewport: Rc<LocalViewport>,
    scheduler: Rc<LocalScheduler<SystemClock>>,
    scroll_to_top: ScrollToTop,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Self {
        let viewport = Rc::new(LocalViewport::new(0.0));
        let scheduler = Rc::new(LocalScheduler::new(SystemClock::new()));
        let env = Environment::new(viewport.clone(), scheduler.clone());
        let scroll_to_top = ScrollToTop::mount_with(Some(&env), &config.scroll, |visible| {
            debug!(
                "Scroll-to-top button {}",
                if visible { "shown" } else { "hidden" }
            );
        });

        Self {
            counter: Counter::from_config(&config.counter),
            config,
            theme,
            page: Page::Home,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            pending_key: None,
            viewport_height: 0,
            button_area: None,
            viewport,
            scheduler,
            scroll_to_top,
        }
    }

    pub fn scroll_to_top(&self) -> &ScrollToTop {
        &self.scroll_to_top
    }

    /// Catalog grouped for the home page
    pub fn groups(&self) -> Vec<CategoryGroup<'static>> {
        catalog::group_by_category(catalog::entries())
    }

    /// Pixel height of one terminal row
    pub fn row_height(&self) -> f64 {
        f64::from(self.config.ui.row_height_px.max(1))
    }

    /// Viewport offset in pixels
    pub fn scroll_offset(&self) -> f64 {
        self.viewport.scroll_offset()
    }

    /// First content row shown at the top of the content area
    pub fn scroll_row(&self) -> u16 {
        (self.scroll_offset() / self.row_height()).round() as u16
    }

    /// Rows the current page renders
    pub fn content_height(&self) -> u16 {
        match self.page {
            Page::Home => home::content_rows(&self.groups()),
            Page::Counter => 0,
        }
    }

    /// Record the content area height and update the scrollable extent
    pub fn set_viewport_height(&mut self, rows: u16) {
        self.viewport_height = rows;
        let overflow = self.content_height().saturating_sub(rows);
        self.viewport.set_max_offset(f64::from(overflow) * self.row_height());
    }

    /// Run due timers, deliver scroll events, then advance animations by a frame
    pub fn pump(&self) {
        self.scheduler.run_due_timers();
        self.viewport.dispatch_scroll_events();
        self.scheduler.run_frame();
    }

    /// Whether the loop should poll at frame rate
    pub fn is_busy(&self) -> bool {
        self.scheduler.is_busy() || self.viewport.has_pending_event()
    }

    /// User-driven scroll by whole rows
    pub fn scroll_rows(&mut self, rows: i32) {
        self.scroll_to_top.cancel_scroll();
        self.viewport.scroll_by(f64::from(rows) * self.row_height());
    }

    pub fn move_down(&mut self) {
        self.scroll_rows(1);
    }

    pub fn move_up(&mut self) {
        self.scroll_rows(-1);
    }

    pub fn scroll_half_page_down(&mut self) {
        self.scroll_rows(i32::from((self.viewport_height / 2).max(1)));
    }

    pub fn scroll_half_page_up(&mut self) {
        self.scroll_rows(-i32::from((self.viewport_height / 2).max(1)));
    }

    pub fn scroll_page_down(&mut self) {
        self.scroll_rows(i32::from(self.viewport_height.max(1)));
    }

    pub fn scroll_page_up(&mut self) {
        self.scroll_rows(-i32::from(self.viewport_height.max(1)));
    }

    /// Jump to the beginning without animation
    pub fn jump_to_top(&mut self) {
        self.scroll_to_top.cancel_scroll();
        self.viewport.set_scroll_offset(0.0);
    }

    /// Jump to the end
    pub fn jump_to_bottom(&mut self) {
        self.scroll_to_top.cancel_scroll();
        self.viewport.set_scroll_offset(self.viewport.max_offset());
    }

    /// The button's action. Does nothing while the button is hidden.
    pub fn activate_scroll_to_top(&mut self) {
        if !self.scroll_to_top.is_visible() {
            return;
        }
        self.scroll_to_top.scroll_to_top();
        self.set_status(self.scroll_to_top.label());
    }

    /// Whether a click at (column, row) lands on the visible button
    pub fn button_hit(&self, column: u16, row: u16) -> bool {
        self.scroll_to_top.is_visible()
            && self.button_area.is_some_and(|area| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
    }

    /// Switch page; the new page starts at the top
    pub fn next_page(&mut self) {
        self.page = self.page.next();
        self.scroll_to_top.cancel_scroll();
        self.viewport.set_scroll_offset(0.0);
        self.set_viewport_height(self.viewport_height);
        self.clear_status();
    }

    pub fn increment(&mut self) {
        if self.page == Page::Counter {
            self.counter.increment();
        }
    }

    pub fn decrement(&mut self) {
        if self.page == Page::Counter {
            self.counter.decrement();
        }
    }

    pub fn reset_counter(&mut self) {
        if self.page == Page::Counter {
            self.counter.reset();
        }
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Normal => Mode::Help,
            Mode::Help => Mode::Normal,
        };
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
