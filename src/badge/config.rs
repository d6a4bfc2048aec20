use std::time::Duration;

/// Interaction parameters for an elastic badge.
///
/// All tunable constants live here; the state machine takes one of these at
/// construction and never reads globals.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BadgeConfig {
    /// Radius of the circle that follows the pointer, in pixels.
    pub drag_radius: f64,
    /// Drag distance beyond which the badge detaches instead of springing
    /// back.
    pub max_drag_length: f64,
    /// Lower bound for the shrink ratio of the origin circle. Keeps the
    /// origin radius positive and the tangent geometry non-degenerate.
    pub min_ratio: f64,
    /// How long the spring-back animation runs.
    pub spring_duration: Duration,
    /// Tension of the overshoot easing curve used for spring-back.
    pub overshoot_tension: f64,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            drag_radius: 50.0,
            max_drag_length: 300.0,
            min_ratio: 0.3,
            spring_duration: Duration::from_millis(500),
            overshoot_tension: 4.0,
        }
    }
}
