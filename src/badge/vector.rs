use cgmath::{Point2, Vector2};

/// Rotates a vector by an angle given as its cosine and sine.
pub fn rotate(v: Vector2<f64>, cos: f64, sin: f64) -> Vector2<f64> {
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Returns the point some fraction `t` of the way from `a` to `b`.
pub fn lerp(a: Point2<f64>, b: Point2<f64>, t: f64) -> Point2<f64> {
    a + (b - a) * t
}

#[cfg(test)]
#[test]
fn test_rotate_quarter_turn() {
    let v = rotate(Vector2::new(1.0, 0.0), 0.0, 1.0);
    approx::assert_abs_diff_eq!(v, Vector2::new(0.0, 1.0), epsilon = 1e-12);
}

#[cfg(test)]
#[test]
fn test_rotate_identity() {
    let v = Vector2::new(3.0, -4.0);
    approx::assert_abs_diff_eq!(rotate(v, 1.0, 0.0), v, epsilon = 1e-12);
}

#[cfg(test)]
#[test]
fn test_lerp_endpoints_and_midpoint() {
    let a = Point2::new(0.0, 10.0);
    let b = Point2::new(20.0, 30.0);
    approx::assert_abs_diff_eq!(lerp(a, b, 0.0), a);
    approx::assert_abs_diff_eq!(lerp(a, b, 1.0), b);
    approx::assert_abs_diff_eq!(lerp(a, b, 0.5), Point2::new(10.0, 20.0));
}
