//! One source path turned into its beam assembly.
//!
//! A unit ends in one of two shapes:
//! - flat: `base`, `beam` and up to two rays joining their end points;
//! - split: an `outside` and an `inside` flat piece, for arcs and circles
//!   whose projected copy has outer tangents with the original.

use crate::geom2::{circle_tangent_angles, Arc, Circle, GeomCfg, Line, Path, Point};
use crate::model::Model;

use super::divide::divide_arc;
use super::occlusion::first_is_outside;
use super::options::Projector;

/// Suffix for the paths of a piece folded into another piece.
const WRAP_SUFFIX: &str = "_2";

/// Unsplit assembly: the placed source path, its projected copy and the rays.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatBeam {
    pub base: Path,
    pub beam: Path,
    /// Start-to-start and end-to-end rays. Circles have none; zero-length rays are dropped.
    pub rays: [Option<Line>; 2],
    /// Third piece of an arc split, on the same side as this one.
    pub wrap: Option<Box<FlatBeam>>,
}

impl FlatBeam {
    /// Build without looking for tangency. Used for pieces that are already split.
    pub(crate) fn build(path: &Path, offset: Point, projector: &Projector) -> Self {
        let base = projector.base(path, offset);
        let beam = projector.project(path, offset);
        let rays = match (base.end_points(), beam.end_points()) {
            (Some([b0, b1]), Some([p0, p1])) => {
                [ray(b0, p0, &projector.cfg), ray(b1, p1, &projector.cfg)]
            }
            _ => [None, None],
        };
        Self {
            base,
            beam,
            rays,
            wrap: None,
        }
    }

    fn write_paths(&self, model: &mut Model, suffix: &str) {
        model.paths.insert(format!("base{suffix}"), self.base);
        model.paths.insert(format!("beam{suffix}"), self.beam);
        for (i, ray) in self.rays.iter().enumerate() {
            if let Some(line) = ray {
                model.paths.insert(format!("ray{i}{suffix}"), Path::Line(*line));
            }
        }
    }

    pub fn to_model(&self) -> Model {
        let mut model = Model::new();
        self.write_paths(&mut model, "");
        if let Some(wrap) = &self.wrap {
            wrap.write_paths(&mut model, WRAP_SUFFIX);
        }
        model
    }
}

fn ray(from: Point, to: Point, cfg: &GeomCfg) -> Option<Line> {
    ((to - from).norm() > cfg.eps_len).then(|| Line::new(from, to))
}

/// Beam assembly of one source path.
#[derive(Clone, Debug, PartialEq)]
pub enum BeamUnit {
    Flat(FlatBeam),
    Split { outside: FlatBeam, inside: FlatBeam },
}

impl BeamUnit {
    /// Build the assembly for `path` sitting at `offset` in its drawing.
    ///
    /// Lines are always flat. Arcs and circles split at the angles where the
    /// outer tangents with their projected copy touch them; when there are
    /// no such angles (one contains the other) or an arc's sweep holds none
    /// of them, the result stays flat.
    pub fn build(path: &Path, offset: Point, projector: &Projector) -> Self {
        match path {
            Path::Line(_) => BeamUnit::Flat(FlatBeam::build(path, offset, projector)),
            Path::Circle(circle) => tangent_angles(path, offset, projector)
                .map(|angles| split_circle(circle, angles, offset, projector))
                .unwrap_or_else(|| BeamUnit::Flat(FlatBeam::build(path, offset, projector))),
            Path::Arc(arc) => tangent_angles(path, offset, projector)
                .and_then(|angles| split_arc(arc, angles, offset, projector))
                .unwrap_or_else(|| BeamUnit::Flat(FlatBeam::build(path, offset, projector))),
        }
    }

    fn split(first: FlatBeam, second: FlatBeam, first_outside: bool) -> Self {
        if first_outside {
            BeamUnit::Split {
                outside: first,
                inside: second,
            }
        } else {
            BeamUnit::Split {
                outside: second,
                inside: first,
            }
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, BeamUnit::Split { .. })
    }

    /// Model layout: flat paths `base`/`beam`/`ray0`/`ray1`, or child models
    /// `outside`/`inside`.
    pub fn to_model(&self) -> Model {
        match self {
            BeamUnit::Flat(flat) => flat.to_model(),
            BeamUnit::Split { outside, inside } => Model::new()
                .with_model("outside", outside.to_model())
                .with_model("inside", inside.to_model()),
        }
    }
}

fn tangent_angles(path: &Path, offset: Point, projector: &Projector) -> Option<[f64; 2]> {
    let base = projector.base(path, offset).as_circle()?;
    let beam = projector.project(path, offset).as_circle()?;
    circle_tangent_angles(&base, &beam)
}

fn split_circle(circle: &Circle, angles: [f64; 2], offset: Point, projector: &Projector) -> BeamUnit {
    let halves = [
        Arc::new(circle.origin, circle.radius, angles[1], angles[0]),
        Arc::new(circle.origin, circle.radius, angles[0], angles[1]),
    ];
    let [first, second] = halves.map(|half| FlatBeam::build(&Path::Arc(half), offset, projector));
    let first_outside = first_is_outside(&first, &second, &projector.cfg);
    tracing::trace!(?angles, first_outside, "circle split");
    BeamUnit::split(first, second, first_outside)
}

fn split_arc(arc: &Arc, angles: [f64; 2], offset: Point, projector: &Projector) -> Option<BeamUnit> {
    let pieces = divide_arc(arc, &angles, projector.cfg.eps_angle);
    if pieces.len() < 2 {
        return None;
    }
    // two cuts yield at most three pieces
    let mut beams = pieces
        .into_iter()
        .map(|piece| FlatBeam::build(&Path::Arc(piece), offset, projector));
    let mut first = beams.next()?;
    let second = beams.next()?;
    let third = beams.next();

    // first and third lie on the same side of the cuts; classify before folding
    let first_outside = first_is_outside(&first, &second, &projector.cfg);
    if let Some(third) = third {
        first.wrap = Some(Box::new(third));
    }
    tracing::trace!(?angles, wrapped = first.wrap.is_some(), first_outside, "arc split");
    Some(BeamUnit::split(first, second, first_outside))
}
