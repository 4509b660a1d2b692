//! Degree-based angle helpers shared by arcs, splitting and intersections.

use nalgebra::Vector2;

use super::types::Arc;

/// Fold `deg` into [0, 360).
#[inline]
pub fn no_revolutions(deg: f64) -> f64 {
    let folded = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

/// Direction of `v` in degrees, in [0, 360).
#[inline]
pub fn angle_of(v: Vector2<f64>) -> f64 {
    no_revolutions(v.y.atan2(v.x).to_degrees())
}

/// Whether `v` lies between `a` and `b` (in either order).
///
/// `exclusive` demands a margin of `eps` from both limits; otherwise the
/// limits are widened by `eps`.
#[inline]
pub fn is_between(v: f64, a: f64, b: f64, exclusive: bool, eps: f64) -> bool {
    let lo = a.min(b);
    let hi = a.max(b);
    if exclusive {
        lo + eps < v && v < hi - eps
    } else {
        lo - eps <= v && v <= hi + eps
    }
}

/// Whether direction `deg` falls within the sweep of `arc`.
///
/// The arc may carry negative or multi-revolution angles, so the normalized
/// sweep is also tested one revolution forward and backward.
pub fn is_between_arc_angles(deg: f64, arc: &Arc, exclusive: bool, eps: f64) -> bool {
    let start = no_revolutions(arc.start_angle);
    let end = start + arc.span();
    let deg = no_revolutions(deg);
    [-360.0, 0.0, 360.0]
        .iter()
        .any(|shift| is_between(deg, start + shift, end + shift, exclusive, eps))
}
