//! Axis-aligned extents of paths.

use nalgebra::Vector2;

use super::angle::is_between_arc_angles;
use super::types::{Path, Point};

/// Axis-aligned box `[low, high]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    pub low: Point,
    pub high: Point,
}

impl Extents {
    /// Smallest box holding all `points`; None for an empty iterator.
    pub fn of_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Extents> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Extents { low: p, high: p },
                Some(e) => Extents {
                    low: e.low.inf(&p),
                    high: e.high.sup(&p),
                },
            })
        })
    }

    #[inline]
    pub fn union(&self, other: &Extents) -> Extents {
        Extents {
            low: self.low.inf(&other.low),
            high: self.high.sup(&other.high),
        }
    }

    #[inline]
    pub fn translated(&self, v: Point) -> Extents {
        Extents {
            low: self.low + v,
            high: self.high + v,
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        (self.low + self.high) * 0.5
    }
}

/// Extents of one path. Arcs include each axis extreme their sweep passes.
pub fn path_extents(path: &Path) -> Extents {
    match path {
        Path::Line(l) => Extents {
            low: l.origin.inf(&l.end),
            high: l.origin.sup(&l.end),
        },
        Path::Circle(c) => {
            let r = Vector2::new(c.radius, c.radius);
            Extents {
                low: c.origin - r,
                high: c.origin + r,
            }
        }
        Path::Arc(a) => {
            let ends = [a.start_point(), a.end_point()];
            let extremes = [0.0, 90.0, 180.0, 270.0]
                .into_iter()
                .filter(|&deg| is_between_arc_angles(deg, a, false, 0.0))
                .map(|deg| a.point_at(deg));
            // an arc always has two end points
            Extents::of_points(ends.into_iter().chain(extremes)).unwrap_or(Extents {
                low: a.origin,
                high: a.origin,
            })
        }
    }
}
