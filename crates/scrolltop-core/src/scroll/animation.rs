//! L3 Molecular Layer: Smooth scroll animator
//!
//! Combines easing functions and timing utilities to move the viewport to a
//! target offset. Prefers the viewport's native smooth scroll; otherwise
//! steps the offset once per host frame.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::debug;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{lerp_bounded, progress};
use crate::env::{Environment, FrameId};

/// One manual animation from `start_offset` to `target_offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    pub start_offset: f64,
    pub target_offset: f64,
    pub start_time: Duration,
    pub duration: Duration,
    pub easing: EasingType,
}

impl AnimationRun {
    /// Normalized progress at `now`
    pub fn progress_at(&self, now: Duration) -> f64 {
        progress(now.saturating_sub(self.start_time), self.duration)
    }

    /// Offset the run prescribes at `now`, always inside the start/target segment
    pub fn offset_at(&self, now: Duration) -> f64 {
        let t = self.progress_at(now);
        if t >= 1.0 {
            return self.target_offset;
        }
        lerp_bounded(self.start_offset, self.target_offset, self.easing.apply(t))
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Animating { run: AnimationRun, frame: FrameId },
}

#[derive(Debug)]
struct AnimatorState {
    phase: Phase,
    /// Bumped on every start and cancel; a frame carrying an older value is stale
    generation: u64,
}

/// Smooth scroll controller
///
/// Call [`SmoothScroller::animate_to`] to start; frames are scheduled on the
/// environment's scheduler. A new call supersedes the run in flight, starting
/// from wherever the viewport is at that moment.
pub struct SmoothScroller {
    env: Option<Environment>,
    easing: EasingType,
    native_smooth: bool,
    state: Rc<RefCell<AnimatorState>>,
}

impl SmoothScroller {
    pub fn new(env: Option<&Environment>, easing: EasingType, native_smooth: bool) -> Self {
        Self {
            env: env.cloned(),
            easing,
            native_smooth,
            state: Rc::new(RefCell::new(AnimatorState {
                phase: Phase::Idle,
                generation: 0,
            })),
        }
    }

    /// Check if a manual animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.state.borrow().phase, Phase::Animating { .. })
    }

    /// The manual run in flight, if any
    pub fn current_run(&self) -> Option<AnimationRun> {
        match self.state.borrow().phase {
            Phase::Animating { run, .. } => Some(run),
            Phase::Idle => None,
        }
    }

    /// Move the viewport to `target` over `duration`.
    ///
    /// A zero duration jumps straight to the target without scheduling a frame.
    pub fn animate_to(&self, target: f64, duration: Duration) {
        let Some(env) = &self.env else {
            return;
        };

        if self.cancel() {
            debug!("Superseding in-flight scroll animation");
        }

        if self.native_smooth && env.viewport.supports_smooth_scroll() {
            debug!("Native smooth scroll to {}", target);
            env.viewport.smooth_scroll_to(target);
            return;
        }

        let start_offset = env.viewport.scroll_offset();
        if duration.is_zero() || start_offset == target {
            env.viewport.set_scroll_offset(target);
            return;
        }

        let run = AnimationRun {
            start_offset,
            target_offset: target,
            start_time: env.scheduler.now(),
            duration,
            easing: self.easing,
        };
        let generation = self.state.borrow().generation;
        let frame = schedule_step(env, Rc::downgrade(&self.state), generation);
        self.state.borrow_mut().phase = Phase::Animating { run, frame };
        debug!(
            "Scroll animation {} -> {} over {:?}",
            start_offset, target, duration
        );
    }

    /// Stop a manual run where it is. Returns whether one was in flight.
    pub fn cancel(&self) -> bool {
        let mut state = self.state.borrow_mut();
        state.generation = state.generation.wrapping_add(1);
        match std::mem::replace(&mut state.phase, Phase::Idle) {
            Phase::Animating { frame, .. } => {
                if let Some(env) = &self.env {
                    env.scheduler.cancel_frame(frame);
                }
                true
            }
            Phase::Idle => false,
        }
    }
}

impl Drop for SmoothScroller {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for SmoothScroller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmoothScroller")
            .field("easing", &self.easing)
            .field("native_smooth", &self.native_smooth)
            .field("run", &self.current_run())
            .finish()
    }
}

fn schedule_step(env: &Environment, state: Weak<RefCell<AnimatorState>>, generation: u64) -> FrameId {
    let frame_env = env.clone();
    env.scheduler.request_frame(Box::new(move |timestamp| {
        step(&frame_env, &state, generation, timestamp);
    }))
}

/// Advance the run by one frame
fn step(env: &Environment, state: &Weak<RefCell<AnimatorState>>, generation: u64, timestamp: Duration) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let run = {
        let state = state.borrow();
        if state.generation != generation {
            return;
        }
        match state.phase {
            Phase::Animating { run, .. } => run,
            Phase::Idle => return,
        }
    };

    if run.progress_at(timestamp) >= 1.0 {
        env.viewport.set_scroll_offset(run.target_offset);
        let mut state = state.borrow_mut();
        // A run started from inside the write owns the phase now
        if state.generation == generation {
            state.phase = Phase::Idle;
        }
        debug!("Scroll animation reached {}", run.target_offset);
        return;
    }

    env.viewport.set_scroll_offset(run.offset_at(timestamp));

    let next = schedule_step(env, Rc::downgrade(&state), generation);
    let mut state = state.borrow_mut();
    if state.generation != generation {
        // Superseded from inside the viewport write
        env.scheduler.cancel_frame(next);
        return;
    }
    if let Phase::Animating { frame, .. } = &mut state.phase {
        *frame = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::local::{LocalScheduler, LocalViewport, ManualClock};
    use crate::env::Viewport;

    const FRAME: Duration = Duration::from_millis(16);

    struct Harness {
        clock: ManualClock,
        viewport: Rc<LocalViewport>,
        scheduler: Rc<LocalScheduler<ManualClock>>,
        env: Environment,
    }

    impl Harness {
        fn new(native_smooth: bool) -> Self {
            let clock = ManualClock::new();
            let viewport = Rc::new(LocalViewport::with_native_smooth(10_000.0, native_smooth));
            let scheduler = Rc::new(LocalScheduler::new(clock.clone()));
            let env = Environment::new(viewport.clone(), scheduler.clone());
            Self {
                clock,
                viewport,
                scheduler,
                env,
            }
        }

        /// Advance one frame and return the offset written by it
        fn frame(&self) -> f64 {
            self.clock.advance(FRAME);
            self.scheduler.run_frame();
            self.viewport.scroll_offset()
        }

        /// Run frames until nothing is scheduled; returns every observed offset
        fn run_to_end(&self) -> Vec<f64> {
            let mut offsets = Vec::new();
            while self.scheduler.has_pending_frames() {
                offsets.push(self.frame());
                assert!(offsets.len() < 1000, "animation never finished");
            }
            offsets
        }
    }

    #[test]
    fn test_animation_ends_exactly_at_target() {
        for easing in [
            EasingType::Linear,
            EasingType::QuadOut,
            EasingType::CubicOut,
            EasingType::QuinticOut,
            EasingType::ExpoOut,
        ] {
            let harness = Harness::new(false);
            harness.viewport.set_scroll_offset(1234.5);
            let scroller = SmoothScroller::new(Some(&harness.env), easing, true);

            scroller.animate_to(0.0, Duration::from_millis(500));
            assert!(scroller.is_animating());
            harness.run_to_end();

            assert_eq!(harness.viewport.scroll_offset(), 0.0, "{:?}", easing);
            assert!(!scroller.is_animating());
        }
    }

    #[test]
    fn test_offsets_are_monotonic_and_bounded() {
        let harness = Harness::new(false);
        harness.viewport.set_scroll_offset(800.0);
        let scroller = SmoothScroller::new(Some(&harness.env), EasingType::QuadOut, true);

        scroller.animate_to(0.0, Duration::from_millis(500));
        let offsets = harness.run_to_end();

        assert!(offsets.len() > 2);
        let mut prev = 800.0;
        for offset in offsets {
            assert!(offset <= prev, "regressed: {} after {}", offset, prev);
            assert!((0.0..=800.0).contains(&offset));
            prev = offset;
        }
    }

    #[test]
    fn test_scrolling_down_is_monotonic() {
        let harness = Harness::new(false);
        let scroller = SmoothScroller::new(Some(&harness.env), EasingType::CubicOut, true);

        scroller.animate_to(600.0, Duration::from_millis(300));
        let offsets = harness.run_to_end();
        assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(offsets.last(), Some(&600.0));
    }

    #[test]
    fn test_zero_duration_jumps_without_frames() {
        let harness = Harness::new(false);
        harness.viewport.set_scroll_offset(800.0);
        let scroller = SmoothScroller::new(Some(&harness.env), EasingType::QuadOut, true);

        scroller.animate_to(0.0, Duration::ZERO);

        assert_eq!(harness.viewport.scroll_offset(), 0.0);
        assert!(!harness.scheduler.has_pending_frames());
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_supersession_starts_from_current_offset() {
        let harness = Harness::new(false);
        harness.viewport.set_scroll_offset(1000.0);
        let scroller = SmoothScroller::new(Some(&harness.env), EasingType::Linear, true);

        scroller.animate_to(0.0, Duration::from_millis(400));
        for _ in 0..5 {
            harness.frame();
        }
        let mid = harness.viewport.scroll_offset();
        assert!(mid < 1000.0 && mid > 0.0);

        scroller.animate_to(600.0, Duration::from_millis(400));
        let run = scroller.current_run().unwrap();
        assert_eq!(run.start_offset, mid);
        assert_eq!(run.target_offset, 600.0);

        // Only one frame callback is ever queued
        let offsets = harness.run_to_end();
        let (lo, hi) = (mid.min(600.0), mid.max(600.0));
        for offset in &offsets {
            assert!((lo..=hi).contains(offset), "{} left the second run", offset);
        }
        assert_eq!(harness.viewport.scroll_offset(), 600.0);
    }

    #[test]
    fn test_single_frame_queued_after_supersession() {
        let harness = Harness::new(false);
        harness.viewport.set_scroll_offset(900.0);
        let scroller = SmoothScroller::new(Some(&harness.env), EasingType::QuadOut, true);

        scroller.animate_to(0.0, Duration::from_millis(500));
        scroller.animate_to(300.0, Duration::from_millis(500));
        scroller.animate_to(100.0, Duration::from_millis(500));

        harness.clock.advance(FRAME);
        assert_eq!(harness.scheduler.run_frame(), 1);
        harness.run_to_end();
        assert_eq!(harness.viewport.scroll_offset(), 100.0);
    }

    #[test]
    fn test_native_smooth_scroll_is_preferred() {
        let harness = Harness::new(true);
        harness.viewport.set_scroll_offset(700.0);
        let scroller = SmoothScroller::new(Some(&harness.env), EasingType::QuadOut, true);

        scroller.animate_to(0.0, Duration::from_millis(500));

        assert_eq!(harness.viewport.last_smooth_request(), Some(0.0));
        assert!(!harness.scheduler.has_pending_frames());
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_native_smooth_can_be_disabled() {
        let harness = Harness::new(true);
        harness.viewport.set_scroll_offset(700.0);
        let scroller = SmoothScroller::new(Some(&harness.env), EasingType::QuadOut, false);

        scroller.animate_to(0.0, Duration::from_millis(200));
        assert!(scroller.is_animating());
        assert_eq!(harness.viewport.last_smooth_request(), None);
        harness.run_to_end();
        assert_eq!(harness.viewport.scroll_offset(), 0.0);
    }

    #[test]
    fn test_cancel_stops_in_place() {
        let harness = Harness::new(false);
        harness.viewport.set_scroll_offset(500.0);
        let scroller = SmoothScroller::new(Some(&harness.env), EasingType::Linear, true);

        scroller.animate_to(0.0, Duration::from_millis(500));
        harness.frame();
        let stopped_at = harness.viewport.scroll_offset();

        assert!(scroller.cancel());
        assert!(!scroller.cancel());
        assert!(!harness.scheduler.has_pending_frames());
        harness.clock.advance(Duration::from_secs(1));
        harness.scheduler.run_frame();
        assert_eq!(harness.viewport.scroll_offset(), stopped_at);
    }

    #[test]
    fn test_user_scroll_mid_animation_is_tolerated() {
        let harness = Harness::new(false);
        harness.viewport.set_scroll_offset(800.0);
        let scroller = SmoothScroller::new(Some(&harness.env), EasingType::QuadOut, true);

        scroller.animate_to(0.0, Duration::from_millis(300));
        harness.frame();
        // The user drags the page somewhere else; the run still lands on target
        harness.viewport.set_scroll_offset(2000.0);
        harness.run_to_end();
        assert_eq!(harness.viewport.scroll_offset(), 0.0);
    }

    #[test]
    fn test_no_environment_is_noop() {
        let scroller = SmoothScroller::new(None, EasingType::QuadOut, true);
        scroller.animate_to(0.0, Duration::from_millis(500));
        assert!(!scroller.is_animating());
        assert!(!scroller.cancel());
    }

    #[test]
    fn test_drop_cancels_pending_frame() {
        let harness = Harness::new(false);
        harness.viewport.set_scroll_offset(400.0);
        let scroller = SmoothScroller::new(Some(&harness.env), EasingType::QuadOut, true);
        scroller.animate_to(0.0, Duration::from_millis(500));
        drop(scroller);
        assert!(!harness.scheduler.has_pending_frames());
    }

    type WriteHook = Box<dyn FnMut(f64) -> bool>;

    /// Viewport that runs a hook synchronously inside every offset write.
    /// The hook is dropped once it returns true.
    struct ReentrantViewport {
        inner: LocalViewport,
        hook: RefCell<Option<WriteHook>>,
    }

    impl ReentrantViewport {
        fn new() -> Self {
            Self {
                inner: LocalViewport::new(10_000.0),
                hook: RefCell::new(None),
            }
        }

        fn on_write(&self, hook: impl FnMut(f64) -> bool + 'static) {
            *self.hook.borrow_mut() = Some(Box::new(hook));
        }
    }

    impl Viewport for ReentrantViewport {
        fn scroll_offset(&self) -> f64 {
            self.inner.scroll_offset()
        }

        fn set_scroll_offset(&self, offset: f64) {
            self.inner.set_scroll_offset(offset);
            let hook = self.hook.borrow_mut().take();
            if let Some(mut hook) = hook {
                if !hook(offset) {
                    *self.hook.borrow_mut() = Some(hook);
                }
            }
        }

        fn add_scroll_listener(&self, listener: crate::env::ScrollListener) -> crate::env::ListenerId {
            self.inner.add_scroll_listener(listener)
        }

        fn remove_scroll_listener(&self, id: crate::env::ListenerId) {
            self.inner.remove_scroll_listener(id);
        }
    }

    fn reentrant_setup() -> (
        ManualClock,
        Rc<ReentrantViewport>,
        Rc<LocalScheduler<ManualClock>>,
        Rc<SmoothScroller>,
    ) {
        let clock = ManualClock::new();
        let viewport = Rc::new(ReentrantViewport::new());
        let scheduler = Rc::new(LocalScheduler::new(clock.clone()));
        let env = Environment::new(viewport.clone(), scheduler.clone());
        let scroller = Rc::new(SmoothScroller::new(Some(&env), EasingType::Linear, false));
        (clock, viewport, scheduler, scroller)
    }

    fn drain(clock: &ManualClock, scheduler: &LocalScheduler<ManualClock>) {
        let mut frames = 0;
        while scheduler.has_pending_frames() {
            clock.advance(FRAME);
            scheduler.run_frame();
            frames += 1;
            assert!(frames < 1000, "animation never finished");
        }
    }

    #[test]
    fn test_run_started_from_final_write_is_kept() {
        let (clock, viewport, scheduler, scroller) = reentrant_setup();
        viewport.set_scroll_offset(800.0);

        let weak = Rc::downgrade(&scroller);
        viewport.on_write(move |offset| {
            if offset != 0.0 {
                return false;
            }
            if let Some(scroller) = weak.upgrade() {
                scroller.animate_to(500.0, Duration::from_millis(100));
            }
            true
        });

        scroller.animate_to(0.0, Duration::from_millis(100));
        drain(&clock, &scheduler);

        assert_eq!(viewport.scroll_offset(), 500.0);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_run_started_from_mid_write_drops_stale_frame() {
        let (clock, viewport, scheduler, scroller) = reentrant_setup();
        viewport.set_scroll_offset(800.0);
        scroller.animate_to(0.0, Duration::from_millis(400));

        let weak = Rc::downgrade(&scroller);
        viewport.on_write(move |_| {
            if let Some(scroller) = weak.upgrade() {
                scroller.animate_to(500.0, Duration::from_millis(400));
            }
            true
        });

        clock.advance(FRAME);
        assert_eq!(scheduler.run_frame(), 1);
        let mid = viewport.scroll_offset();
        assert!(mid < 800.0 && mid > 0.0);

        let run = scroller.current_run().unwrap();
        assert_eq!(run.start_offset, mid);
        assert_eq!(run.target_offset, 500.0);

        // The old run's follow-up frame was cancelled; only the new run ticks
        clock.advance(FRAME);
        assert_eq!(scheduler.run_frame(), 1);
        drain(&clock, &scheduler);
        assert_eq!(viewport.scroll_offset(), 500.0);
    }
}
