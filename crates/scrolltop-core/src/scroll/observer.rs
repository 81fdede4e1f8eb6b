//! L3 Molecular Layer: Scroll observer
//!
//! Turns the viewport's scroll events into a throttled visibility signal.
//! Registration returns an [`ObserverHandle`] that owns the listener; the
//! listener goes away on `stop()` or when the handle is dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use super::throttle::Throttle;
use crate::env::{Environment, ListenerId, Viewport};

/// Last evaluated scroll position and the threshold it is compared against.
///
/// Visibility is always derived from the two, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    current_offset: f64,
    threshold: f64,
}

impl ScrollState {
    pub fn new(current_offset: f64, threshold: f64) -> Self {
        Self {
            current_offset,
            threshold,
        }
    }

    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.current_offset > self.threshold
    }
}

struct ObserverShared {
    state: Cell<ScrollState>,
    last_reported: Cell<Option<bool>>,
    stopped: Cell<bool>,
    on_change: RefCell<Box<dyn FnMut(bool)>>,
}

impl ObserverShared {
    fn evaluate(&self, offset: f64, force: bool) {
        if self.stopped.get() {
            return;
        }
        let state = ScrollState::new(offset, self.state.get().threshold);
        self.state.set(state);

        let visible = state.visible();
        if !force && self.last_reported.get() == Some(visible) {
            return;
        }
        self.last_reported.set(Some(visible));
        if let Ok(mut on_change) = self.on_change.try_borrow_mut() {
            on_change(visible);
        }
    }
}

struct Registration {
    viewport: Rc<dyn Viewport>,
    listener: ListenerId,
    throttle: Rc<Throttle<f64>>,
}

/// Entry point for mounting a scroll observer
pub struct ScrollObserver;

impl ScrollObserver {
    /// Start observing the viewport.
    ///
    /// `on_visibility_change` runs once right away with the current
    /// visibility, then every time a throttled evaluation flips it.
    /// Without an environment this returns an inert handle.
    pub fn start(
        env: Option<&Environment>,
        threshold: f64,
        throttle_interval: Duration,
        on_visibility_change: impl FnMut(bool) + 'static,
    ) -> ObserverHandle {
        let Some(env) = env else {
            debug!("No viewport available, scroll observer is inert");
            return ObserverHandle::inert();
        };

        let shared = Rc::new(ObserverShared {
            state: Cell::new(ScrollState::new(0.0, threshold)),
            last_reported: Cell::new(None),
            stopped: Cell::new(false),
            on_change: RefCell::new(Box::new(on_visibility_change)),
        });

        let evaluator = Rc::clone(&shared);
        let throttle = Rc::new(Throttle::new(
            Rc::clone(&env.scheduler),
            throttle_interval,
            move |offset| evaluator.evaluate(offset, false),
        ));

        let weak_viewport = Rc::downgrade(&env.viewport);
        let weak_throttle = Rc::downgrade(&throttle);
        let listener = env.viewport.add_scroll_listener(Rc::new(move || {
            let (Some(viewport), Some(throttle)) = (weak_viewport.upgrade(), weak_throttle.upgrade())
            else {
                return;
            };
            throttle.call(viewport.scroll_offset());
        }));

        debug!(
            "Scroll observer started (threshold={}, throttle={:?})",
            threshold, throttle_interval
        );
        shared.evaluate(env.viewport.scroll_offset(), true);

        ObserverHandle {
            shared: Some(shared),
            registration: RefCell::new(Some(Registration {
                viewport: Rc::clone(&env.viewport),
                listener,
                throttle,
            })),
        }
    }
}

/// Owner of a mounted observer's scroll listener
pub struct ObserverHandle {
    shared: Option<Rc<ObserverShared>>,
    registration: RefCell<Option<Registration>>,
}

impl ObserverHandle {
    /// A handle that observes nothing
    pub fn inert() -> Self {
        Self {
            shared: None,
            registration: RefCell::new(None),
        }
    }

    /// Deregister the listener and drop any throttled evaluation still queued.
    /// Safe to call repeatedly.
    pub fn stop(&self) {
        if let Some(shared) = &self.shared {
            shared.stopped.set(true);
        }
        if let Some(registration) = self.registration.borrow_mut().take() {
            registration.viewport.remove_scroll_listener(registration.listener);
            registration.throttle.cancel();
            debug!("Scroll observer stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.registration.borrow().is_some()
    }

    /// Last evaluated state; `None` for an inert handle
    pub fn state(&self) -> Option<ScrollState> {
        self.shared.as_ref().map(|shared| shared.state.get())
    }

    /// Visibility derived from the last evaluation
    pub fn is_visible(&self) -> bool {
        self.state().is_some_and(|state| state.visible())
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for ObserverHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverHandle")
            .field("active", &self.is_active())
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::local::{LocalScheduler, LocalViewport, ManualClock};

    struct Harness {
        clock: ManualClock,
        viewport: Rc<LocalViewport>,
        scheduler: Rc<LocalScheduler<ManualClock>>,
        env: Environment,
        reports: Rc<RefCell<Vec<bool>>>,
    }

    impl Harness {
        fn new() -> Self {
            let clock = ManualClock::new();
            let viewport = Rc::new(LocalViewport::new(5000.0));
            let scheduler = Rc::new(LocalScheduler::new(clock.clone()));
            let env = Environment::new(viewport.clone(), scheduler.clone());
            Self {
                clock,
                viewport,
                scheduler,
                env,
                reports: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn start(&self, threshold: f64) -> ObserverHandle {
            let reports = Rc::clone(&self.reports);
            ScrollObserver::start(
                Some(&self.env),
                threshold,
                Duration::from_millis(100),
                move |visible| reports.borrow_mut().push(visible),
            )
        }

        /// User scrolls to `offset`, then time passes so throttling settles
        fn scroll_and_settle(&self, offset: f64) {
            self.viewport.set_scroll_offset(offset);
            self.viewport.dispatch_scroll_events();
            self.clock.advance(Duration::from_millis(150));
            self.scheduler.run_due_timers();
        }
    }

    #[test]
    fn test_initial_evaluation_reports_current_state() {
        let harness = Harness::new();
        harness.viewport.set_scroll_offset(800.0);
        let handle = harness.start(300.0);
        assert_eq!(*harness.reports.borrow(), vec![true]);
        assert!(handle.is_visible());
        assert_eq!(handle.state().map(|s| s.current_offset()), Some(800.0));
    }

    #[test]
    fn test_threshold_scenario() {
        let harness = Harness::new();
        let handle = harness.start(300.0);
        assert_eq!(*harness.reports.borrow(), vec![false]);

        harness.scroll_and_settle(150.0);
        assert!(!handle.is_visible());
        assert_eq!(*harness.reports.borrow(), vec![false]);

        harness.scroll_and_settle(450.0);
        assert!(handle.is_visible());
        harness.scroll_and_settle(100.0);
        assert!(!handle.is_visible());
        assert_eq!(*harness.reports.borrow(), vec![false, true, false]);
    }

    #[test]
    fn test_offset_equal_to_threshold_is_hidden() {
        let harness = Harness::new();
        let handle = harness.start(300.0);
        harness.scroll_and_settle(300.0);
        assert!(!handle.is_visible());
    }

    #[test]
    fn test_settled_visibility_matches_last_offset() {
        let harness = Harness::new();
        let handle = harness.start(300.0);
        let offsets = [10.0, 900.0, 320.0, 299.0, 301.0, 0.0, 4000.0, 250.0, 310.0];

        // Rapid scrolling: one event every 5ms, well inside the throttle interval
        for offset in offsets {
            harness.viewport.set_scroll_offset(offset);
            harness.viewport.dispatch_scroll_events();
            harness.clock.advance(Duration::from_millis(5));
            harness.scheduler.run_due_timers();
        }
        harness.clock.advance(Duration::from_millis(200));
        harness.scheduler.run_due_timers();

        let state = handle.state().unwrap();
        assert_eq!(state.current_offset(), 310.0);
        assert!(handle.is_visible());
        assert_eq!(harness.reports.borrow().last(), Some(&true));
    }

    #[test]
    fn test_stop_prevents_queued_evaluation() {
        let harness = Harness::new();
        let handle = harness.start(300.0);

        // Leading evaluation, then a coalesced one waiting on the timer
        harness.viewport.set_scroll_offset(100.0);
        harness.viewport.dispatch_scroll_events();
        harness.viewport.set_scroll_offset(900.0);
        harness.viewport.dispatch_scroll_events();
        assert!(harness.scheduler.has_pending_timers());

        handle.stop();
        handle.stop();
        assert!(!handle.is_active());
        assert_eq!(harness.viewport.listener_count(), 0);

        harness.clock.advance(Duration::from_millis(500));
        harness.scheduler.run_due_timers();
        harness.scroll_and_settle(2000.0);
        assert_eq!(*harness.reports.borrow(), vec![false]);
    }

    #[test]
    fn test_drop_unregisters_listener() {
        let harness = Harness::new();
        {
            let _handle = harness.start(300.0);
            assert_eq!(harness.viewport.listener_count(), 1);
        }
        assert_eq!(harness.viewport.listener_count(), 0);
        assert!(!harness.scheduler.has_pending_timers());
    }

    #[test]
    fn test_no_environment_is_inert() {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reports);
        let handle = ScrollObserver::start(None, 300.0, Duration::from_millis(100), move |v| {
            sink.borrow_mut().push(v)
        });
        assert!(!handle.is_active());
        assert!(handle.state().is_none());
        assert!(!handle.is_visible());
        handle.stop();
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn test_stop_from_inside_callback() {
        let harness = Harness::new();
        let slot: Rc<RefCell<Option<ObserverHandle>>> = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&slot);
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let handle = ScrollObserver::start(
            Some(&harness.env),
            300.0,
            Duration::from_millis(100),
            move |visible| {
                seen.set(seen.get() + 1);
                if visible {
                    if let Some(handle) = inner.borrow().as_ref() {
                        handle.stop();
                    }
                }
            },
        );
        *slot.borrow_mut() = Some(handle);

        harness.scroll_and_settle(600.0);
        harness.scroll_and_settle(0.0);
        harness.scroll_and_settle(700.0);
        assert_eq!(count.get(), 2);
        assert_eq!(harness.viewport.listener_count(), 0);
    }
}
