//! In-process host: a clamped viewport offset plus a queue-driven scheduler.
//!
//! Nothing here runs on its own. The owning loop pumps it, in this order:
//! `run_due_timers()`, `dispatch_scroll_events()`, `run_frame()`, draw.
//! The terminal UI drives it with [`SystemClock`]; tests and the headless
//! simulation drive it with [`ManualClock`].

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::{
    FrameCallback, FrameId, ListenerId, Scheduler, ScrollListener, TimerCallback, TimerId,
    Viewport,
};

/// Monotonic time source for [`LocalScheduler`]
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time since construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Explicitly advanced clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

struct PendingTimer {
    id: TimerId,
    due: Duration,
    callback: TimerCallback,
}

/// FIFO frame queue and timer list pumped by the host loop
pub struct LocalScheduler<C: Clock = SystemClock> {
    clock: C,
    next_id: Cell<u64>,
    frames: RefCell<VecDeque<(FrameId, FrameCallback)>>,
    timers: RefCell<Vec<PendingTimer>>,
}

impl<C: Clock> LocalScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: Cell::new(1),
            frames: RefCell::new(VecDeque::new()),
            timers: RefCell::new(Vec::new()),
        }
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    /// Run every frame callback queued before this call.
    ///
    /// Callbacks requested while the frame runs land in the next frame.
    /// Returns the number of callbacks run.
    pub fn run_frame(&self) -> usize {
        let batch = std::mem::take(&mut *self.frames.borrow_mut());
        let timestamp = self.clock.now();
        let count = batch.len();
        for (_, callback) in batch {
            callback(timestamp);
        }
        count
    }

    /// Run every timer whose deadline has passed, earliest first.
    /// Returns the number of timers run.
    pub fn run_due_timers(&self) -> usize {
        let mut count = 0;
        loop {
            let now = self.clock.now();
            let due = {
                let mut timers = self.timers.borrow_mut();
                let next = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= now)
                    .min_by_key(|(_, t)| (t.due, t.id.0))
                    .map(|(idx, _)| idx);
                next.map(|idx| timers.remove(idx))
            };
            match due {
                Some(timer) => {
                    (timer.callback)();
                    count += 1;
                }
                None => return count,
            }
        }
    }

    pub fn has_pending_frames(&self) -> bool {
        !self.frames.borrow().is_empty()
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.timers.borrow().is_empty()
    }

    /// Deadline of the earliest pending timer
    pub fn next_timer_due(&self) -> Option<Duration> {
        self.timers.borrow().iter().map(|t| t.due).min()
    }

    /// True when frames or timers are waiting to run
    pub fn is_busy(&self) -> bool {
        self.has_pending_frames() || self.has_pending_timers()
    }
}

impl<C: Clock> Scheduler for LocalScheduler<C> {
    fn now(&self) -> Duration {
        self.clock.now()
    }

    fn request_frame(&self, callback: FrameCallback) -> FrameId {
        let id = FrameId(self.allocate_id());
        self.frames.borrow_mut().push_back((id, callback));
        id
    }

    fn cancel_frame(&self, id: FrameId) {
        self.frames.borrow_mut().retain(|(frame_id, _)| *frame_id != id);
    }

    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> TimerId {
        let id = TimerId(self.allocate_id());
        let due = self.clock.now() + delay;
        self.timers.borrow_mut().push(PendingTimer { id, due, callback });
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        self.timers.borrow_mut().retain(|t| t.id != id);
    }
}

/// Scrollable document with an offset clamped to `[0, max_offset]`.
///
/// Offset changes queue a single coalesced scroll event, delivered to
/// listeners in registration order by [`LocalViewport::dispatch_scroll_events`].
pub struct LocalViewport {
    offset: Cell<f64>,
    max_offset: Cell<f64>,
    native_smooth: bool,
    listeners: RefCell<Vec<(ListenerId, ScrollListener)>>,
    next_id: Cell<u64>,
    pending_event: Cell<bool>,
    last_smooth_request: Cell<Option<f64>>,
}

impl LocalViewport {
    pub fn new(max_offset: f64) -> Self {
        Self::with_native_smooth(max_offset, false)
    }

    /// A viewport that claims native smooth-scroll support.
    /// Native requests jump straight to the target.
    pub fn with_native_smooth(max_offset: f64, native_smooth: bool) -> Self {
        Self {
            offset: Cell::new(0.0),
            max_offset: Cell::new(max_offset.max(0.0)),
            native_smooth,
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            pending_event: Cell::new(false),
            last_smooth_request: Cell::new(None),
        }
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset.get()
    }

    /// Update the scrollable extent (content or window resized)
    pub fn set_max_offset(&self, max_offset: f64) {
        self.max_offset.set(max_offset.max(0.0));
        self.set_scroll_offset(self.offset.get());
    }

    /// User-driven relative scroll
    pub fn scroll_by(&self, delta: f64) {
        self.set_scroll_offset(self.offset.get() + delta);
    }

    /// Deliver the pending scroll event, if any. Returns whether one fired.
    pub fn dispatch_scroll_events(&self) -> bool {
        if !self.pending_event.replace(false) {
            return false;
        }
        let listeners: Vec<ScrollListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
        true
    }

    pub fn has_pending_event(&self) -> bool {
        self.pending_event.get()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Target of the most recent native smooth-scroll request
    pub fn last_smooth_request(&self) -> Option<f64> {
        self.last_smooth_request.get()
    }
}

impl Viewport for LocalViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn set_scroll_offset(&self, offset: f64) {
        let clamped = offset.clamp(0.0, self.max_offset.get());
        if clamped != self.offset.get() {
            self.offset.set(clamped);
            self.pending_event.set(true);
        }
    }

    fn supports_smooth_scroll(&self) -> bool {
        self.native_smooth
    }

    fn smooth_scroll_to(&self, offset: f64) {
        self.last_smooth_request.set(Some(offset));
        self.set_scroll_offset(offset);
    }

    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_scroll_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}
