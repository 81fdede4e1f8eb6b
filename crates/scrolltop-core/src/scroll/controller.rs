//! L2 Organism Layer: Scroll-to-top trigger
//!
//! Pairs a [`ScrollObserver`] with a [`SmoothScroller`] on one environment.
//! The host renders its button from [`ScrollToTop::is_visible`] and wires
//! the button's action to [`ScrollToTop::scroll_to_top`].

use std::time::Duration;

use super::animation::SmoothScroller;
use super::observer::{ObserverHandle, ScrollObserver, ScrollState};
use crate::config::ScrollConfig;
use crate::env::Environment;

pub struct ScrollToTop {
    observer: ObserverHandle,
    scroller: SmoothScroller,
    duration: Duration,
}

impl ScrollToTop {
    /// Accessible label of the trigger
    pub const LABEL: &'static str = "Scroll to top";

    pub fn mount(env: Option<&Environment>, config: &ScrollConfig) -> Self {
        Self::mount_with(env, config, |_| {})
    }

    /// Mount and get told whenever visibility flips (and once on mount)
    pub fn mount_with(
        env: Option<&Environment>,
        config: &ScrollConfig,
        on_visibility_change: impl FnMut(bool) + 'static,
    ) -> Self {
        let observer = ScrollObserver::start(
            env,
            config.threshold,
            Duration::from_millis(config.throttle_ms),
            on_visibility_change,
        );
        let scroller = SmoothScroller::new(env, config.easing, config.native_smooth);
        Self {
            observer,
            scroller,
            duration: Duration::from_millis(config.animation_duration_ms),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.observer.is_visible()
    }

    pub fn state(&self) -> Option<ScrollState> {
        self.observer.state()
    }

    pub fn label(&self) -> &'static str {
        Self::LABEL
    }

    pub fn is_animating(&self) -> bool {
        self.scroller.is_animating()
    }

    pub fn is_mounted(&self) -> bool {
        self.observer.is_active()
    }

    /// Animate the viewport back to offset zero
    pub fn scroll_to_top(&self) {
        self.scroller.animate_to(0.0, self.duration);
    }

    /// Cancel a run in flight, leaving the viewport where it is
    pub fn cancel_scroll(&self) -> bool {
        self.scroller.cancel()
    }

    /// Stop observing and cancel any run in flight
    pub fn unmount(&self) {
        self.observer.stop();
        self.scroller.cancel();
    }
}

impl Drop for ScrollToTop {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for ScrollToTop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollToTop")
            .field("observer", &self.observer)
            .field("scroller", &self.scroller)
            .field("duration", &self.duration)
            .finish()
    }
}
