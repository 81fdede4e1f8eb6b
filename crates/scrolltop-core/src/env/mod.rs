//! Host environment abstraction.
//!
//! The scroll controller never talks to a terminal, a browser or a test
//! harness directly. It reads and writes the viewport offset through
//! [`Viewport`] and schedules work through [`Scheduler`]. Both are
//! single-threaded: handles are `Rc`, callbacks are not `Send`.
//!
//! - `local` - in-process viewport and queue-driven scheduler
//! - `web` - `web_sys::Window` backed host (feature `web`, wasm32 only)

pub mod local;
#[cfg(any(test, all(feature = "web", target_arch = "wasm32")))]
mod pending;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

use std::rc::Rc;
use std::time::Duration;

/// Callback invoked for every delivered scroll event
pub type ScrollListener = Rc<dyn Fn()>;

/// Callback invoked once on the next frame with the frame timestamp
pub type FrameCallback = Box<dyn FnOnce(Duration)>;

/// Callback invoked once after a timeout elapses
pub type TimerCallback = Box<dyn FnOnce()>;

/// Registration id for a scroll listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Handle for a requested frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// Handle for a pending timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// The scrollable document as seen by the controller.
///
/// Offsets are vertical pixels from the top of the document. The offset may
/// change between any two calls (the user scrolls too), so callers re-read
/// it instead of caching.
pub trait Viewport {
    /// Current vertical scroll offset
    fn scroll_offset(&self) -> f64;

    /// Jump to `offset` immediately
    fn set_scroll_offset(&self, offset: f64);

    /// Whether [`Viewport::smooth_scroll_to`] performs a native eased scroll
    fn supports_smooth_scroll(&self) -> bool {
        false
    }

    /// Request a native smooth scroll to `offset`. Fire-and-forget.
    ///
    /// The default falls back to an immediate jump.
    fn smooth_scroll_to(&self, offset: f64) {
        self.set_scroll_offset(offset);
    }

    /// Subscribe to scroll events
    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId;

    /// Unsubscribe. Unknown ids are ignored.
    fn remove_scroll_listener(&self, id: ListenerId);
}

/// Time source and deferred-work queue of the host's render loop.
pub trait Scheduler {
    /// Monotonic time since an arbitrary origin
    fn now(&self) -> Duration;

    /// Run `callback` on the next frame of the host's refresh cycle
    fn request_frame(&self, callback: FrameCallback) -> FrameId;

    /// Drop a pending frame callback. Unknown ids are ignored.
    fn cancel_frame(&self, id: FrameId);

    /// Run `callback` once `delay` has elapsed
    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> TimerId;

    /// Drop a pending timeout. Unknown ids are ignored.
    fn clear_timeout(&self, id: TimerId);
}

/// Viewport and scheduler of one host, shared by every controller mounted
/// in it.
#[derive(Clone)]
pub struct Environment {
    pub viewport: Rc<dyn Viewport>,
    pub scheduler: Rc<dyn Scheduler>,
}

impl Environment {
    pub fn new(viewport: Rc<dyn Viewport>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            viewport,
            scheduler,
        }
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("scroll_offset", &self.viewport.scroll_offset())
            .field("now", &self.scheduler.now())
            .finish()
    }
}
