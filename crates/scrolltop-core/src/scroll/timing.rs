//! L4 Atomic Layer: Time calculation utilities for scroll animations
//!
//! Provides pure functions for calculating animation progress and interpolation.

use std::time::Duration;

/// Calculate animation progress (0.0 to 1.0) from elapsed time and duration
///
/// # Arguments
/// * `elapsed` - Time since the animation started
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]; 1.0 for a zero duration
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor [0.0, 1.0]
///
/// # Returns
/// Interpolated value
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Interpolate and clamp the result into the segment between `from` and `to`
#[inline]
pub fn lerp_bounded(from: f64, to: f64, t: f64) -> f64 {
    lerp(from, to, t).clamp(from.min(to), from.max(to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
        assert!((lerp(800.0, 0.0, 0.25) - 600.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp_bounded_stays_in_segment() {
        assert_eq!(lerp_bounded(800.0, 0.0, 1.2), 0.0);
        assert_eq!(lerp_bounded(800.0, 0.0, -0.1), 800.0);
    }

    #[test]
    fn test_progress() {
        let d = Duration::from_millis(500);
        assert_eq!(progress(Duration::ZERO, d), 0.0);
        assert!((progress(Duration::from_millis(250), d) - 0.5).abs() < 1e-9);
        assert_eq!(progress(Duration::from_millis(900), d), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(Duration::from_millis(3), Duration::ZERO) - 1.0).abs() < 0.001);
    }
}
