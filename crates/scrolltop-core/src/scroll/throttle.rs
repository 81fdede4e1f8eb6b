//! L4 Atomic Layer: Leading + trailing edge throttle
//!
//! The first call after a quiet period runs immediately. Calls that arrive
//! inside the interval are coalesced: only the latest input is kept, and it
//! runs once at `last_run + interval`. Cancelling drops the pending input
//! and clears the deferred timer.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::env::{Scheduler, TimerId};

struct ThrottleState<T> {
    last_run: Option<Duration>,
    pending: Option<T>,
    timer: Option<TimerId>,
    cancelled: bool,
}

struct Inner<T> {
    scheduler: Rc<dyn Scheduler>,
    interval: Duration,
    callback: RefCell<Box<dyn FnMut(T)>>,
    state: RefCell<ThrottleState<T>>,
}

/// Rate-limited wrapper around a callback.
///
/// Dropping the throttle cancels it.
pub struct Throttle<T: 'static> {
    inner: Rc<Inner<T>>,
}

impl<T: 'static> Throttle<T> {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        interval: Duration,
        callback: impl FnMut(T) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                interval,
                callback: RefCell::new(Box::new(callback)),
                state: RefCell::new(ThrottleState {
                    last_run: None,
                    pending: None,
                    timer: None,
                    cancelled: false,
                }),
            }),
        }
    }

    /// Feed one input. Runs the callback now or defers it.
    pub fn call(&self, input: T) {
        Inner::call(&self.inner, input);
    }

    /// Stop for good: nothing runs after this, including a deferred call
    pub fn cancel(&self) {
        let mut state = self.inner.state.borrow_mut();
        state.cancelled = true;
        state.pending = None;
        if let Some(timer) = state.timer.take() {
            self.inner.scheduler.clear_timeout(timer);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.state.borrow().cancelled
    }

    /// True while a coalesced input waits for its trailing run
    pub fn has_pending(&self) -> bool {
        self.inner.state.borrow().pending.is_some()
    }
}

impl<T: 'static> Drop for Throttle<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T: 'static> Inner<T> {
    fn call(this: &Rc<Self>, input: T) {
        let now = this.scheduler.now();
        let run_now = {
            let mut state = this.state.borrow_mut();
            if state.cancelled {
                return;
            }
            let quiet = state
                .last_run
                .map_or(true, |last| now.saturating_sub(last) >= this.interval);
            if quiet && state.timer.is_none() {
                state.last_run = Some(now);
                Some(input)
            } else {
                state.pending = Some(input);
                if state.timer.is_none() {
                    let due = state.last_run.unwrap_or(now) + this.interval;
                    state.timer = Some(Self::arm(this, due.saturating_sub(now)));
                }
                None
            }
        };

        if let Some(input) = run_now {
            Self::invoke(this, input);
        }
    }

    fn arm(this: &Rc<Self>, delay: Duration) -> TimerId {
        let weak = Rc::downgrade(this);
        this.scheduler.set_timeout(
            delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Inner::flush(&inner);
                }
            }),
        )
    }

    fn flush(this: &Rc<Self>) {
        let input = {
            let mut state = this.state.borrow_mut();
            state.timer = None;
            if state.cancelled {
                return;
            }
            let Some(input) = state.pending.take() else {
                return;
            };
            state.last_run = Some(this.scheduler.now());
            input
        };
        Self::invoke(this, input);
    }

    fn invoke(this: &Rc<Self>, input: T) {
        if this.state.borrow().cancelled {
            return;
        }
        match this.callback.try_borrow_mut() {
            Ok(mut callback) => callback(input),
            Err(_) => {
                // Called from inside our own callback: run it on the next timer turn
                let mut state = this.state.borrow_mut();
                state.pending = Some(input);
                if state.timer.is_none() {
                    state.timer = Some(Self::arm(this, Duration::ZERO));
                }
            }
        }
    }
}
