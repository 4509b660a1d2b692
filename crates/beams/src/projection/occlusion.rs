//! Which of two beam pieces hides the other.

use crate::geom2::{intersects, GeomCfg, Path};

use super::unit::FlatBeam;

/// Whether `occluder` hides `occludee`: its base properly crosses the
/// occludee's projected copy or one of its rays. Touching contacts do not count.
pub fn occludes(occluder: &FlatBeam, occludee: &FlatBeam, cfg: &GeomCfg) -> bool {
    let probes = [
        Some(occludee.beam),
        occludee.rays[0].map(Path::Line),
        occludee.rays[1].map(Path::Line),
    ];
    probes
        .iter()
        .flatten()
        .any(|probe| intersects(&occluder.base, probe, true, cfg))
}

/// Whether `first` of a split pair is the occluder (`outside`).
///
/// `first` wins when its base crosses `second`; otherwise `second` wins when
/// the reverse probe hits. When neither probe hits, `first` is kept as the
/// occluder.
pub fn first_is_outside(first: &FlatBeam, second: &FlatBeam, cfg: &GeomCfg) -> bool {
    if occludes(first, second, cfg) {
        true
    } else if occludes(second, first, cfg) {
        false
    } else {
        tracing::debug!("no occlusion probe hit; keeping first piece outside");
        true
    }
}
