//! Projection options and the derived per-invocation projector.

use serde::{Deserialize, Serialize};

use crate::error::BeamError;
use crate::geom2::{polar, GeomCfg, Path, Point};

/// Beam configuration: displacement `distance` along `angle` (degrees,
/// counter-clockwise from +X) and the shrink factor `scale`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamOptions {
    pub distance: f64,
    pub angle: f64,
    pub scale: f64,
}

impl Default for BeamOptions {
    fn default() -> Self {
        Self {
            distance: 0.0,
            angle: 0.0,
            scale: 1.0,
        }
    }
}

impl BeamOptions {
    pub fn new(distance: f64, angle: f64, scale: f64) -> Self {
        Self {
            distance,
            angle,
            scale,
        }
    }

    /// Reject options that would yield nonsensical geometry.
    pub fn validate(&self) -> Result<(), BeamError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(BeamError::InvalidScale(self.scale));
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(BeamError::InvalidDistance(self.distance));
        }
        if !self.angle.is_finite() {
            return Err(BeamError::InvalidAngle(self.angle));
        }
        Ok(())
    }
}

/// Maps source paths onto their base and projected copies.
///
/// The projected copy of `p` (already moved by its model offset) is
/// `scale * p + beam_offset + scale_offset`, where `scale_offset` anchors the
/// scaling at the drawing's centre instead of the coordinate origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub beam_offset: Point,
    pub scale: f64,
    pub scale_offset: Point,
    pub cfg: GeomCfg,
}

impl Projector {
    pub fn new(options: &BeamOptions, center: Point, cfg: GeomCfg) -> Self {
        Self {
            beam_offset: polar(options.angle, options.distance),
            scale: options.scale,
            scale_offset: center - center * options.scale,
            cfg,
        }
    }

    /// Source path placed at its absolute position.
    #[inline]
    pub fn base(&self, path: &Path, offset: Point) -> Path {
        path.translated(offset)
    }

    /// Scaled and displaced copy of the source path.
    #[inline]
    pub fn project(&self, path: &Path, offset: Point) -> Path {
        path.translated(offset)
            .scaled(self.scale)
            .translated(self.beam_offset + self.scale_offset)
    }
}
