//! Arc splitting at cut angles.

use crate::geom2::{is_between_arc_angles, Arc};

/// Split `arc` at each of `angles` that falls strictly inside one of the
/// pieces produced so far.
///
/// Cuts are applied in the order given and each one re-scans the current
/// pieces, so a later cut may land in a piece created by an earlier one.
/// A cut inside no piece is skipped. The pieces follow the arc's sweep and
/// together cover exactly the original span.
pub fn divide_arc(arc: &Arc, angles: &[f64], eps_angle: f64) -> Vec<Arc> {
    let mut arcs = vec![*arc];
    for &angle in angles {
        let Some(index) = arcs
            .iter()
            .position(|piece| is_between_arc_angles(angle, piece, true, eps_angle))
        else {
            continue;
        };
        let mut tail = arcs[index];
        tail.start_angle = angle;
        arcs[index].end_angle = angle;
        arcs.insert(index + 1, tail);
    }
    arcs
}
