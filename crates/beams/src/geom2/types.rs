//! Path primitives (line, arc, circle) and the tolerances used to compare them.
//!
//! - `GeomCfg`: centralizes epsilons for length and angle checks.
//! - `Line`, `Arc`, `Circle`: the leaf shapes of a drawing.
//! - `Path`: tagged sum of the three, serialized with a `type` discriminant.
//!
//! Conventions
//! - Angles are degrees, counter-clockwise from +X.
//! - An arc sweeps counter-clockwise from `start_angle` to `end_angle`; an end
//!   below the start wraps through 360.
//! - Scaling is about the coordinate origin (origins, endpoints and radii are
//!   multiplied), translation moves every point.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::angle;

/// Points and displacement vectors share one type.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Lengths/distances closer than this are equal.
    pub eps_len: f64,
    /// Angles (degrees) closer than this are equal.
    pub eps_angle: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_len: 1e-7,
            eps_angle: 1e-7,
        }
    }
}

/// Straight segment from `origin` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub origin: Point,
    pub end: Point,
}

impl Line {
    #[inline]
    pub fn new(origin: Point, end: Point) -> Self {
        Self { origin, end }
    }
}

/// Circular arc, counter-clockwise from `start_angle` to `end_angle` (degrees).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arc {
    pub origin: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    #[inline]
    pub fn new(origin: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            origin,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Point on the underlying circle at `deg`.
    #[inline]
    pub fn point_at(&self, deg: f64) -> Point {
        let r = deg.to_radians();
        self.origin + Vector2::new(r.cos(), r.sin()) * self.radius
    }

    #[inline]
    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    #[inline]
    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle)
    }

    /// End angle shifted by whole revolutions so that it is not below the start.
    pub fn end_angle_unwrapped(&self) -> f64 {
        if self.end_angle < self.start_angle {
            let revolutions = ((self.start_angle - self.end_angle) / 360.0).ceil();
            revolutions * 360.0 + self.end_angle
        } else {
            self.end_angle
        }
    }

    /// Swept angle in degrees. Spans beyond one revolution are folded back.
    pub fn span(&self) -> f64 {
        let span = self.end_angle_unwrapped() - self.start_angle;
        if span > 360.0 {
            angle::no_revolutions(span)
        } else {
            span
        }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.origin, self.radius)
    }
}

/// Full circle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub origin: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(origin: Point, radius: f64) -> Self {
        Self { origin, radius }
    }
}

/// A leaf path of a drawing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Path {
    Line(Line),
    Arc(Arc),
    Circle(Circle),
}

impl Path {
    /// Copy moved by `v`.
    pub fn translated(&self, v: Point) -> Path {
        match *self {
            Path::Line(l) => Path::Line(Line::new(l.origin + v, l.end + v)),
            Path::Arc(a) => Path::Arc(Arc {
                origin: a.origin + v,
                ..a
            }),
            Path::Circle(c) => Path::Circle(Circle::new(c.origin + v, c.radius)),
        }
    }

    /// Copy scaled by `factor` about the coordinate origin.
    pub fn scaled(&self, factor: f64) -> Path {
        match *self {
            Path::Line(l) => Path::Line(Line::new(l.origin * factor, l.end * factor)),
            Path::Arc(a) => Path::Arc(Arc {
                origin: a.origin * factor,
                radius: a.radius * factor,
                ..a
            }),
            Path::Circle(c) => Path::Circle(Circle::new(c.origin * factor, c.radius * factor)),
        }
    }

    /// Start and end point; circles have none.
    pub fn end_points(&self) -> Option<[Point; 2]> {
        match self {
            Path::Line(l) => Some([l.origin, l.end]),
            Path::Arc(a) => Some([a.start_point(), a.end_point()]),
            Path::Circle(_) => None,
        }
    }

    /// Underlying circle of an arc or circle.
    pub fn as_circle(&self) -> Option<Circle> {
        match self {
            Path::Line(_) => None,
            Path::Arc(a) => Some(a.circle()),
            Path::Circle(c) => Some(*c),
        }
    }

    pub fn as_arc(&self) -> Option<&Arc> {
        match self {
            Path::Arc(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Path::Line(l) => Some(l),
            _ => None,
        }
    }
}

impl From<Line> for Path {
    fn from(l: Line) -> Self {
        Path::Line(l)
    }
}

impl From<Arc> for Path {
    fn from(a: Arc) -> Self {
        Path::Arc(a)
    }
}

impl From<Circle> for Path {
    fn from(c: Circle) -> Self {
        Path::Circle(c)
    }
}
