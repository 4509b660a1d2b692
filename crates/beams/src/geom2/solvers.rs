//! Small 2D solvers used by the projection.
//!
//! - `circle_tangent_angles`: where the outer common tangents touch a circle.
//! - `polar`: displacement vector from a direction and a length.
//!
//! Code cross-refs: `types::{Circle, Point}`, `angle::no_revolutions`
use nalgebra::Vector2;

use super::angle::{angle_of, no_revolutions};
use super::types::{Circle, Point};

/// Angles (degrees, on `a`) at which the two outer common tangent lines of
/// `a` and `b` touch `a`.
///
/// Returns None when one circle contains the other, concentric circles
/// included. Otherwise the tangent normals make an angle `acos((ra-rb)/d)`
/// with the direction from `a` to `b`; the counter-clockwise solution is
/// listed first.
pub fn circle_tangent_angles(a: &Circle, b: &Circle) -> Option<[f64; 2]> {
    let connect = b.origin - a.origin;
    let d = connect.norm();
    if a.radius >= d + b.radius || b.radius >= d + a.radius {
        return None;
    }
    let cos_alpha = ((a.radius - b.radius) / d).clamp(-1.0, 1.0);
    let alpha = cos_alpha.acos().to_degrees();
    if !alpha.is_finite() {
        return None;
    }
    let base = angle_of(connect);
    Some([no_revolutions(base + alpha), no_revolutions(base - alpha)])
}

/// Vector of length `distance` pointing at `deg` (degrees, counter-clockwise from +X).
#[inline]
pub fn polar(deg: f64, distance: f64) -> Point {
    let r = deg.to_radians();
    Vector2::new(r.cos(), r.sin()) * distance
}
