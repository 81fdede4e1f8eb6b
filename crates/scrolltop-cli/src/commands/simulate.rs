use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use scrolltop_core::config::{EasingType, ScrollConfig};
use scrolltop_core::env::local::{Clock, LocalScheduler, LocalViewport, ManualClock};
use scrolltop_core::{Environment, ScrollToTop, Viewport};

/// Upper bound on simulated frames, in case a run never settles
const MAX_FRAMES: usize = 10_000;

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub from: f64,
    pub threshold: f64,
    pub duration_ms: u64,
    pub easing: EasingType,
    pub frames: Vec<FrameSample>,
    pub transitions: Vec<Transition>,
}

#[derive(Debug, Serialize)]
pub struct FrameSample {
    pub t_ms: u64,
    pub offset: f64,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub t_ms: u64,
    pub visible: bool,
}

pub fn run(config: &ScrollConfig, from: f64, fps: u16, json: bool) -> Result<()> {
    let report = simulate(config, from, fps);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "from {:.0}px, threshold {:.0}px, {}ms {:?}",
        report.from, report.threshold, report.duration_ms, report.easing
    );
    for transition in &report.transitions {
        println!(
            "{:>6}ms  button {}",
            transition.t_ms,
            if transition.visible { "shown" } else { "hidden" }
        );
    }
    println!("{:>8} {:>10}  visible", "t", "offset");
    for frame in &report.frames {
        println!(
            "{:>6}ms {:>10.1}  {}",
            frame.t_ms, frame.offset, frame.visible
        );
    }
    Ok(())
}

/// Headless host: scroll to `from`, press the button, and record every frame
/// until the animator and the throttled observer have both settled.
pub fn simulate(config: &ScrollConfig, from: f64, fps: u16) -> SimulationReport {
    let frame = Duration::from_millis((1000 / u64::from(fps.max(1))).max(1));
    let from = from.max(0.0);
    let clock = ManualClock::new();
    let viewport = Rc::new(LocalViewport::new(from));
    let scheduler = Rc::new(LocalScheduler::new(clock.clone()));
    let env = Environment::new(viewport.clone(), scheduler.clone());

    // Terminal-style host: no native smooth scroll
    let config = ScrollConfig {
        native_smooth: false,
        ..config.clone()
    };

    let transitions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&transitions);
    let time = clock.clone();
    let button = ScrollToTop::mount_with(Some(&env), &config, move |visible| {
        sink.borrow_mut().push(Transition {
            t_ms: time.now().as_millis() as u64,
            visible,
        });
    });

    let pump = || {
        scheduler.run_due_timers();
        viewport.dispatch_scroll_events();
        scheduler.run_frame();
    };

    // The user scrolls down, then waits for the observer to settle
    viewport.set_scroll_offset(from);
    pump();
    let settle = Duration::from_millis(config.throttle_ms) + frame;
    clock.advance(settle);
    pump();

    button.scroll_to_top();
    let mut frames = Vec::new();
    while frames.len() < MAX_FRAMES && (scheduler.is_busy() || viewport.has_pending_event()) {
        clock.advance(frame);
        pump();
        frames.push(FrameSample {
            t_ms: clock.now().as_millis() as u64,
            offset: viewport.scroll_offset(),
            visible: button.is_visible(),
        });
    }

    drop(button);
    let transitions = transitions.borrow().clone();
    SimulationReport {
        from,
        threshold: config.threshold,
        duration_ms: config.animation_duration_ms,
        easing: config.easing,
        frames,
        transitions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(duration_ms: u64) -> ScrollConfig {
        ScrollConfig {
            animation_duration_ms: duration_ms,
            ..ScrollConfig::default()
        }
    }

    #[test]
    fn test_simulation_lands_on_top() {
        let report = simulate(&config(500), 1200.0, 60);

        assert!(report.frames.len() > 20);
        assert_eq!(report.frames.last().map(|f| f.offset), Some(0.0));
        assert!(report
            .frames
            .windows(2)
            .all(|pair| pair[1].offset <= pair[0].offset));
    }

    #[test]
    fn test_transitions_show_then_hide() {
        let report = simulate(&config(500), 1200.0, 60);
        let states: Vec<bool> = report.transitions.iter().map(|t| t.visible).collect();
        assert_eq!(states, vec![false, true, false]);
        assert_eq!(report.frames.last().map(|f| f.visible), Some(false));
    }

    #[test]
    fn test_zero_duration_has_no_animation_frames() {
        let report = simulate(&config(0), 800.0, 60);
        // Only the observer's trailing evaluation remains to run
        assert!(report.frames.iter().all(|f| f.offset == 0.0));
        assert_eq!(report.transitions.last().map(|t| t.visible), Some(false));
    }

    #[test]
    fn test_below_threshold_never_shows() {
        let report = simulate(&config(300), 200.0, 60);
        let states: Vec<bool> = report.transitions.iter().map(|t| t.visible).collect();
        assert_eq!(states, vec![false]);
    }
}
