use cgmath::Point2;
use std::time::Duration;

use super::vector::lerp;

/// Time-driven interpolation of the drag circle back to the origin.
///
/// Holds only the easing math and elapsed time; any scheduler that feeds it
/// frame durations can drive it, including tests stepping it by hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpringBack {
    start: Point2<f64>,
    target: Point2<f64>,
    duration: Duration,
    tension: f64,
    elapsed: Duration,
}

impl SpringBack {
    /// Starts a spring-back from `start` toward `target`.
    pub fn new(start: Point2<f64>, target: Point2<f64>, duration: Duration, tension: f64) -> Self {
        Self {
            start,
            target,
            duration,
            tension,
            elapsed: Duration::from_secs(0),
        }
    }

    /// Advances the animation by one frame.
    ///
    /// Returns `true` once the full duration has elapsed.
    pub fn advance(&mut self, frame_duration: Duration) -> bool {
        self.elapsed += frame_duration;
        self.finished()
    }

    /// Whether the animation has run its full duration.
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current interpolated position. Overshoots past the target partway
    /// through, then settles exactly on it at the end.
    pub fn position(&self) -> Point2<f64> {
        let fraction =
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        lerp(self.start, self.target, overshoot(fraction, self.tension))
    }
}

/// Overshoot easing: maps 0 to 0 and 1 to 1, exceeding 1 on the way.
///
/// Same curve as Android's `OvershootInterpolator`.
fn overshoot(t: f64, tension: f64) -> f64 {
    let s = t - 1.0;
    s * s * ((tension + 1.0) * s + tension) + 1.0
}

#[cfg(test)]
#[test]
fn test_overshoot_endpoints() {
    approx::assert_abs_diff_eq!(overshoot(0.0, 4.0), 0.0, epsilon = 1e-12);
    approx::assert_abs_diff_eq!(overshoot(1.0, 4.0), 1.0, epsilon = 1e-12);
}

#[cfg(test)]
#[test]
fn test_overshoot_exceeds_one_midway() {
    assert!(overshoot(0.8, 4.0) > 1.0);
}

#[cfg(test)]
#[test]
fn test_spring_reaches_target_exactly() {
    let start = Point2::new(100.0, 100.0);
    let target = Point2::new(50.0, 50.0);
    let mut spring = SpringBack::new(start, target, Duration::from_millis(500), 4.0);
    assert!(!spring.advance(Duration::from_millis(250)));
    assert!(spring.advance(Duration::from_millis(250)));
    approx::assert_abs_diff_eq!(spring.position(), target, epsilon = 1e-9);
}

#[cfg(test)]
#[test]
fn test_spring_overshoots_past_target() {
    let start = Point2::new(100.0, 50.0);
    let target = Point2::new(50.0, 50.0);
    let mut spring = SpringBack::new(start, target, Duration::from_millis(500), 4.0);
    spring.advance(Duration::from_millis(400));
    // Eased fraction is above 1, so the position lies beyond the target.
    assert!(spring.position().x < target.x);
}
