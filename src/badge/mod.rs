//! The elastic badge core: drag state machine, tangent geometry, and
//! spring-back animation. Rendering is a separate projection of
//! [`Badge::frame`].

use cgmath::{MetricSpace, Point2};
use std::time::Duration;

mod config;
mod geometry;
mod spring;
mod vector;

pub use config::BadgeConfig;
pub use geometry::{blob_outline, BlobOutline};
use spring::SpringBack;

/// Minimum layout width & height, to avoid a degenerate origin position.
const MIN_LAYOUT_SIZE: u32 = 10;

/// Above this ratio the origin circle coincides with the drag circle and is
/// not drawn separately.
const FULL_RATIO_THRESHOLD: f64 = 0.999;

/// Pointer event kinds fed to the badge by the platform adapter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer pressed (mouse button down / touch started).
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released (mouse button up / touch ended or cancelled).
    Up,
}

/// Interaction state of the badge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BadgeState {
    /// At rest on the origin point.
    Idle,
    /// Following the pointer.
    Dragging,
    /// Animating back to the origin after an in-region release.
    SpringingBack,
}

/// A filled circle, in pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    /// Center position.
    pub center: Point2<f64>,
    /// Radius in pixels.
    pub radius: f64,
}

/// Everything the render adapter needs for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BadgeFrame {
    /// The badge itself; always drawn.
    pub drag_circle: Circle,
    /// The shrinking anchor circle, when it is visibly separate.
    pub origin_circle: Option<Circle>,
    /// The elastic connector, when dragging within the valid region.
    pub blob: Option<BlobOutline>,
}

/// Drag state machine for a single elastic badge.
///
/// Maintains these invariants after every update:
/// - `origin_radius == config.drag_radius * ratio`
/// - `ratio == max(min_ratio, (max_drag_length - distance) / max_drag_length)`
///   clamped to `[min_ratio, 1]`
/// - `is_in_region == (distance < max_drag_length)`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Badge {
    config: BadgeConfig,

    /// Anchor position, fixed at the layout center.
    origin_center: Point2<f64>,
    /// Position of the circle that follows the pointer.
    drag_center: Point2<f64>,
    /// Current radius of the shrinking origin circle.
    origin_radius: f64,
    /// Remaining-closeness measure in `[min_ratio, 1]`.
    ratio: f64,

    is_dragged: bool,
    is_in_region: bool,

    /// Spring-back animation in flight, if any.
    spring: Option<SpringBack>,
}

impl Default for Badge {
    fn default() -> Self {
        Self::new(BadgeConfig::default())
    }
}

impl Badge {
    /// Returns a new idle badge. Call [`Badge::set_layout_size`] before
    /// feeding it pointer events.
    pub fn new(config: BadgeConfig) -> Self {
        Self {
            config,
            origin_center: Point2::new(0.0, 0.0),
            drag_center: Point2::new(0.0, 0.0),
            origin_radius: config.drag_radius,
            ratio: 1.0,
            is_dragged: false,
            is_in_region: true,
            spring: None,
        }
    }

    /// Places the origin at the center of a `width` × `height` layout.
    pub fn set_layout_size(&mut self, (width, height): (u32, u32)) {
        let width = std::cmp::max(MIN_LAYOUT_SIZE, width);
        let height = std::cmp::max(MIN_LAYOUT_SIZE, height);
        self.origin_center = Point2::new(width as f64 * 0.5, height as f64 * 0.5);
        if self.state() == BadgeState::Idle {
            self.drag_center = self.origin_center;
        }
    }

    /// Current interaction state.
    pub fn state(&self) -> BadgeState {
        if self.spring.is_some() {
            BadgeState::SpringingBack
        } else if self.is_dragged {
            BadgeState::Dragging
        } else {
            BadgeState::Idle
        }
    }

    /// Processes a pointer event. Always reports the event as handled.
    pub fn handle_pointer(&mut self, event: PointerEvent, pos: Point2<f64>) -> bool {
        match event {
            PointerEvent::Down => {
                // A new press supersedes any spring-back still in flight.
                if self.spring.take().is_some() {
                    self.reset();
                }
                self.is_dragged = in_circle(pos, self.origin_center, self.origin_radius);
                if self.is_dragged {
                    log::debug!("drag started at ({:.1}, {:.1})", pos.x, pos.y);
                }
            }
            PointerEvent::Move => {
                if self.state() == BadgeState::Dragging {
                    self.drag_center = pos;
                    self.update_stretch();
                }
            }
            PointerEvent::Up => {
                if self.state() == BadgeState::Dragging {
                    self.is_in_region =
                        in_circle(pos, self.origin_center, self.config.max_drag_length);
                    if self.is_in_region {
                        log::debug!("released in region, springing back");
                        self.spring = Some(SpringBack::new(
                            self.drag_center,
                            self.origin_center,
                            self.config.spring_duration,
                            self.config.overshoot_tension,
                        ));
                    } else {
                        log::debug!("released out of region, detaching");
                        self.reset();
                    }
                }
            }
        }
        true
    }

    /// Advances the spring-back animation by one frame, if one is running.
    ///
    /// Returns `true` if the badge moved and needs a redraw.
    pub fn advance_animation(&mut self, frame_duration: Duration) -> bool {
        let spring = match &mut self.spring {
            Some(spring) => spring,
            None => return false,
        };
        let finished = spring.advance(frame_duration);
        self.drag_center = spring.position();
        self.update_stretch();
        if finished {
            self.spring = None;
            self.reset();
        }
        true
    }

    /// Restores the idle state: badge on the origin, full ratio, no
    /// animation. Idempotent.
    pub fn reset(&mut self) {
        log::trace!("reset to idle");
        self.spring = None;
        self.drag_center = self.origin_center;
        self.update_stretch();
        self.is_in_region = true;
        self.is_dragged = false;
    }

    /// Recomputes `is_in_region`, `ratio`, and `origin_radius` from the
    /// current drag distance.
    fn update_stretch(&mut self) {
        let distance = self.drag_center.distance(self.origin_center);
        self.is_in_region = distance < self.config.max_drag_length;
        let remaining = (self.config.max_drag_length - distance) / self.config.max_drag_length;
        self.ratio = remaining.max(self.config.min_ratio).min(1.0);
        self.origin_radius = self.config.drag_radius * self.ratio;
    }

    /// Projects the current state into renderable shapes.
    pub fn frame(&self) -> BadgeFrame {
        let drag_circle = Circle {
            center: self.drag_center,
            radius: self.config.drag_radius,
        };
        let connected = self.is_dragged && self.is_in_region;
        let origin_circle = if connected && self.ratio < FULL_RATIO_THRESHOLD {
            Some(Circle {
                center: self.origin_center,
                radius: self.origin_radius,
            })
        } else {
            None
        };
        let blob = if connected {
            blob_outline(
                self.origin_center,
                self.origin_radius,
                self.drag_center,
                self.config.drag_radius,
                self.ratio,
            )
        } else {
            None
        };
        BadgeFrame {
            drag_circle,
            origin_circle,
            blob,
        }
    }
}

fn in_circle(pos: Point2<f64>, center: Point2<f64>, radius: f64) -> bool {
    pos.distance(center) < radius
}

#[cfg(test)]
fn test_badge() -> Badge {
    let mut badge = Badge::new(BadgeConfig::default());
    badge.set_layout_size((1000, 1000));
    badge
}

#[cfg(test)]
#[test]
fn test_layout_centers_origin() {
    let mut badge = Badge::new(BadgeConfig::default());
    badge.set_layout_size((100, 100));
    assert_eq!(badge.origin_center, Point2::new(50.0, 50.0));
    assert_eq!(badge.drag_center, Point2::new(50.0, 50.0));
}

#[cfg(test)]
#[test]
fn test_drag_starts_only_inside_origin_circle() {
    let mut badge = Badge::new(BadgeConfig::default());
    badge.set_layout_size((100, 100));
    badge.handle_pointer(PointerEvent::Down, Point2::new(50.0, 50.0));
    assert_eq!(badge.state(), BadgeState::Dragging);

    let mut badge = test_badge();
    badge.handle_pointer(PointerEvent::Down, Point2::new(900.0, 900.0));
    assert_eq!(badge.state(), BadgeState::Idle);
}

#[cfg(test)]
#[test]
fn test_ratio_at_half_drag_distance() {
    // dragRadius=50, minRatio=0.3, maxDragLength=300; distance 150.
    let mut badge = test_badge();
    badge.handle_pointer(PointerEvent::Down, Point2::new(500.0, 500.0));
    badge.handle_pointer(PointerEvent::Move, Point2::new(650.0, 500.0));
    approx::assert_abs_diff_eq!(badge.ratio, 0.5, epsilon = 1e-12);
    approx::assert_abs_diff_eq!(badge.origin_radius, 25.0, epsilon = 1e-12);
    assert!(badge.is_in_region);
}

#[cfg(test)]
#[test]
fn test_ratio_monotonic_and_clamped() {
    let mut badge = test_badge();
    badge.handle_pointer(PointerEvent::Down, Point2::new(500.0, 500.0));
    let mut last_ratio = badge.ratio;
    for step in 1..=16 {
        let x = 500.0 + 25.0 * step as f64;
        badge.handle_pointer(PointerEvent::Move, Point2::new(x, 500.0));
        assert!(badge.ratio <= last_ratio);
        assert!(badge.ratio >= 0.3 && badge.ratio <= 1.0);
        approx::assert_abs_diff_eq!(
            badge.origin_radius,
            50.0 * badge.ratio,
            epsilon = 1e-12
        );
        last_ratio = badge.ratio;
    }
    // Distance 400 > 300: ratio clamped at the floor.
    approx::assert_abs_diff_eq!(badge.ratio, 0.3, epsilon = 1e-12);
}

#[cfg(test)]
#[test]
fn test_detach_resets_immediately() {
    let mut badge = test_badge();
    badge.handle_pointer(PointerEvent::Down, Point2::new(500.0, 500.0));
    badge.handle_pointer(PointerEvent::Move, Point2::new(900.0, 500.0));
    assert!(!badge.is_in_region);
    badge.handle_pointer(PointerEvent::Up, Point2::new(900.0, 500.0));
    assert_eq!(badge.state(), BadgeState::Idle);
    assert_eq!(badge.drag_center, badge.origin_center);
    approx::assert_abs_diff_eq!(badge.ratio, 1.0);
    assert!(badge.is_in_region);
}

#[cfg(test)]
#[test]
fn test_spring_back_returns_to_origin() {
    let mut badge = test_badge();
    badge.handle_pointer(PointerEvent::Down, Point2::new(500.0, 500.0));
    badge.handle_pointer(PointerEvent::Move, Point2::new(600.0, 500.0));
    badge.handle_pointer(PointerEvent::Up, Point2::new(600.0, 500.0));
    assert_eq!(badge.state(), BadgeState::SpringingBack);

    // Mid-flight the connector is still live.
    assert!(badge.advance_animation(Duration::from_millis(50)));
    assert_eq!(badge.state(), BadgeState::SpringingBack);
    assert!(badge.frame().blob.is_some());

    for _ in 0..9 {
        badge.advance_animation(Duration::from_millis(50));
    }
    assert_eq!(badge.state(), BadgeState::Idle);
    assert_eq!(badge.drag_center, badge.origin_center);
    approx::assert_abs_diff_eq!(badge.ratio, 1.0);
}

#[cfg(test)]
#[test]
fn test_new_press_cancels_spring() {
    let mut badge = test_badge();
    badge.handle_pointer(PointerEvent::Down, Point2::new(500.0, 500.0));
    badge.handle_pointer(PointerEvent::Move, Point2::new(600.0, 500.0));
    badge.handle_pointer(PointerEvent::Up, Point2::new(600.0, 500.0));
    badge.advance_animation(Duration::from_millis(50));
    assert_eq!(badge.state(), BadgeState::SpringingBack);

    // Pressing on the origin stops the animation and starts a fresh drag.
    badge.handle_pointer(PointerEvent::Down, Point2::new(500.0, 500.0));
    assert_eq!(badge.state(), BadgeState::Dragging);
    approx::assert_abs_diff_eq!(badge.ratio, 1.0);
}

#[cfg(test)]
#[test]
fn test_reset_is_idempotent() {
    let mut badge = test_badge();
    badge.handle_pointer(PointerEvent::Down, Point2::new(500.0, 500.0));
    badge.handle_pointer(PointerEvent::Move, Point2::new(650.0, 500.0));
    badge.reset();
    let once = badge;
    badge.reset();
    assert_eq!(badge, once);
    assert_eq!(badge.drag_center, badge.origin_center);
    assert_eq!(badge.state(), BadgeState::Idle);
}

#[cfg(test)]
#[test]
fn test_events_ignored_while_idle() {
    let mut badge = test_badge();
    badge.handle_pointer(PointerEvent::Move, Point2::new(700.0, 700.0));
    badge.handle_pointer(PointerEvent::Up, Point2::new(700.0, 700.0));
    assert_eq!(badge.state(), BadgeState::Idle);
    assert_eq!(badge.drag_center, badge.origin_center);
}

#[cfg(test)]
#[test]
fn test_frame_hides_connector_when_idle_or_detached() {
    let mut badge = test_badge();
    let frame = badge.frame();
    assert!(frame.blob.is_none());
    assert!(frame.origin_circle.is_none());

    badge.handle_pointer(PointerEvent::Down, Point2::new(500.0, 500.0));
    badge.handle_pointer(PointerEvent::Move, Point2::new(650.0, 500.0));
    let frame = badge.frame();
    assert!(frame.blob.is_some());
    assert!(frame.origin_circle.is_some());

    badge.handle_pointer(PointerEvent::Move, Point2::new(900.0, 500.0));
    assert!(badge.frame().blob.is_none());
}
