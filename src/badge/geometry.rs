use cgmath::{InnerSpace, Point2};

use super::vector::{lerp, rotate};

/// Center distance beneath which the two circles are treated as coincident
/// and no outline is produced.
const MIN_CENTER_DISTANCE: f64 = 1e-9;

/// Closed outline connecting the origin circle to the drag circle.
///
/// The outline runs from `p1` through a quadratic curve (control point `c1`)
/// to `p3`, straight across the drag circle to `p4`, then through a second
/// quadratic curve (control point `c2`) back to `p2`, and closes to `p1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlobOutline {
    /// Tangent point on the origin circle, first tangent line.
    pub p1: Point2<f64>,
    /// Tangent point on the origin circle, second tangent line.
    pub p2: Point2<f64>,
    /// Tangent point on the drag circle, first tangent line.
    pub p3: Point2<f64>,
    /// Tangent point on the drag circle, second tangent line.
    pub p4: Point2<f64>,
    /// Control point of the quadratic edge from `p1` to `p3`.
    pub c1: Point2<f64>,
    /// Control point of the quadratic edge from `p4` to `p2`.
    pub c2: Point2<f64>,
}

/// Computes the blob outline between the origin circle and the drag circle.
///
/// Both external tangent lines are found with a single rotation-based
/// construction, so there is no case analysis on how the circles are
/// arranged. `ratio` pulls the quadratic control points inward: at `1.0` the
/// connector is nearly straight, toward the minimum it thins into an elastic
/// thread.
///
/// Returns `None` when the centers (nearly) coincide or when one circle
/// contains the other, where no external tangent exists; callers skip the
/// blob for that frame.
pub fn blob_outline(
    origin_center: Point2<f64>,
    origin_radius: f64,
    drag_center: Point2<f64>,
    drag_radius: f64,
    ratio: f64,
) -> Option<BlobOutline> {
    let oo = origin_center - drag_center;
    let d2 = oo.magnitude2();
    if d2 <= MIN_CENTER_DISTANCE * MIN_CENTER_DISTANCE {
        return None;
    }
    let dr = drag_radius - origin_radius;
    if dr * dr > d2 {
        return None;
    }

    // Half-angle between the center line and each tangent direction.
    let cos_theta = (dr * dr / d2).sqrt();
    let sin_theta = ((d2 - dr * dr) / d2).sqrt();
    let dir1 = rotate(oo, cos_theta, sin_theta).normalize();
    let dir2 = rotate(oo, cos_theta, -sin_theta).normalize();

    let p1 = origin_center + dir1 * origin_radius;
    let p2 = origin_center + dir2 * origin_radius;
    let p3 = drag_center + dir1 * drag_radius;
    let p4 = drag_center + dir2 * drag_radius;

    let temp_a = lerp(p3, p4, 1.0 - ratio);
    let temp_b = lerp(p4, p3, 1.0 - ratio);

    Some(BlobOutline {
        p1,
        p2,
        p3,
        p4,
        c1: lerp(p1, temp_a, 0.5),
        c2: lerp(p2, temp_b, 0.5),
    })
}

/// Evaluates a quadratic Bézier at `t` by repeated interpolation.
fn quad_bezier(a: Point2<f64>, control: Point2<f64>, b: Point2<f64>, t: f64) -> Point2<f64> {
    lerp(lerp(a, control, t), lerp(control, b, t), t)
}

impl BlobOutline {
    /// Flattens the outline into a polygon, splitting each quadratic edge
    /// into `curve_steps` line segments. The polygon starts at `p1` and ends
    /// at `p2`; closing back to `p1` is up to the caller.
    pub fn flatten(&self, curve_steps: usize) -> Vec<Point2<f64>> {
        let mut points = Vec::with_capacity(2 * curve_steps + 2);
        for i in 0..=curve_steps {
            let t = i as f64 / curve_steps as f64;
            points.push(quad_bezier(self.p1, self.c1, self.p3, t));
        }
        for i in 0..=curve_steps {
            let t = i as f64 / curve_steps as f64;
            points.push(quad_bezier(self.p4, self.c2, self.p2, t));
        }
        points
    }
}

#[cfg(test)]
use cgmath::MetricSpace;

#[cfg(test)]
#[test]
fn test_tangent_points_lie_on_circles() {
    let origin = Point2::new(0.0, 0.0);
    let drag = Point2::new(10.0, 0.0);
    let outline = blob_outline(origin, 2.0, drag, 5.0, 0.5).unwrap();
    approx::assert_abs_diff_eq!(outline.p1.distance(origin), 2.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(outline.p2.distance(origin), 2.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(outline.p3.distance(drag), 5.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(outline.p4.distance(drag), 5.0, epsilon = 1e-9);
}

#[cfg(test)]
#[test]
fn test_tangent_points_mirror_across_center_line() {
    // Centers on the x axis, so the two tangent lines mirror across it.
    let outline = blob_outline(
        Point2::new(0.0, 0.0),
        2.0,
        Point2::new(10.0, 0.0),
        5.0,
        0.5,
    )
    .unwrap();
    approx::assert_abs_diff_eq!(outline.p1.x, outline.p2.x, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(outline.p1.y, -outline.p2.y, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(outline.p3.x, outline.p4.x, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(outline.p3.y, -outline.p4.y, epsilon = 1e-9);
}

#[cfg(test)]
#[test]
fn test_equal_radii_tangents_parallel_to_center_line() {
    let outline = blob_outline(
        Point2::new(0.0, 0.0),
        5.0,
        Point2::new(10.0, 0.0),
        5.0,
        1.0,
    )
    .unwrap();
    approx::assert_abs_diff_eq!(outline.p3.y, outline.p1.y, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(outline.p4.y, outline.p2.y, epsilon = 1e-9);
}

#[cfg(test)]
#[test]
fn test_coincident_centers_guarded() {
    let center = Point2::new(50.0, 50.0);
    assert!(blob_outline(center, 25.0, center, 50.0, 0.5).is_none());
}

#[cfg(test)]
#[test]
fn test_nested_circles_guarded() {
    // Drag circle swallows the origin circle; no external tangent.
    assert!(blob_outline(
        Point2::new(0.0, 0.0),
        1.0,
        Point2::new(2.0, 0.0),
        10.0,
        0.5,
    )
    .is_none());
}

#[cfg(test)]
#[test]
fn test_flatten_endpoints() {
    let outline = blob_outline(
        Point2::new(0.0, 0.0),
        2.0,
        Point2::new(10.0, 0.0),
        5.0,
        0.5,
    )
    .unwrap();
    let polygon = outline.flatten(8);
    assert_eq!(polygon.len(), 18);
    approx::assert_abs_diff_eq!(polygon[0], outline.p1, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(polygon[8], outline.p3, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(polygon[9], outline.p4, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(polygon[17], outline.p2, epsilon = 1e-9);
}
