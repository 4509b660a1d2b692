//! Path/path intersection for every pairing of line, arc and circle.
//!
//! With `exclude_tangents` set, only proper crossings count: touching
//! contacts are dropped and a point must lie strictly inside both paths,
//! away from line ends and arc ends. Parallel lines and coincident circles
//! never intersect.

use super::angle::{angle_of, is_between_arc_angles};
use super::types::{Arc, GeomCfg, Line, Path, Point};

/// Circle-like view of an arc or a full circle.
#[derive(Clone, Copy, Debug)]
struct Round {
    origin: Point,
    radius: f64,
    sweep: Option<Arc>,
}

impl Round {
    fn of(path: &Path) -> Option<Round> {
        match *path {
            Path::Line(_) => None,
            Path::Arc(a) => Some(Round {
                origin: a.origin,
                radius: a.radius,
                sweep: Some(a),
            }),
            Path::Circle(c) => Some(Round {
                origin: c.origin,
                radius: c.radius,
                sweep: None,
            }),
        }
    }

    fn holds(&self, p: Point, exclusive: bool, cfg: &GeomCfg) -> bool {
        match &self.sweep {
            None => true,
            Some(arc) => is_between_arc_angles(angle_of(p - self.origin), arc, exclusive, cfg.eps_angle),
        }
    }
}

/// Intersection points of `a` and `b`.
pub fn intersection(a: &Path, b: &Path, exclude_tangents: bool, cfg: &GeomCfg) -> Vec<Point> {
    match (a, b) {
        (Path::Line(l1), Path::Line(l2)) => line_line(l1, l2, exclude_tangents, cfg),
        (Path::Line(l), other) | (other, Path::Line(l)) => match Round::of(other) {
            Some(r) => line_round(l, &r, exclude_tangents, cfg),
            None => Vec::new(),
        },
        _ => match (Round::of(a), Round::of(b)) {
            (Some(ra), Some(rb)) => round_round(&ra, &rb, exclude_tangents, cfg),
            _ => Vec::new(),
        },
    }
}

/// Whether `a` and `b` have at least one intersection point.
#[inline]
pub fn intersects(a: &Path, b: &Path, exclude_tangents: bool, cfg: &GeomCfg) -> bool {
    !intersection(a, b, exclude_tangents, cfg).is_empty()
}

#[inline]
fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Parameter `t` (0 at origin, 1 at end) is on a segment of length `len`.
#[inline]
fn within_segment(t: f64, len: f64, exclusive: bool, eps: f64) -> bool {
    if exclusive {
        t * len > eps && (1.0 - t) * len > eps
    } else {
        t * len >= -eps && (1.0 - t) * len >= -eps
    }
}

fn line_line(l1: &Line, l2: &Line, exclusive: bool, cfg: &GeomCfg) -> Vec<Point> {
    let d = l1.end - l1.origin;
    let e = l2.end - l2.origin;
    let (len1, len2) = (d.norm(), e.norm());
    let denom = cross(d, e);
    if denom.abs() <= cfg.eps_len * len1 * len2 {
        return Vec::new();
    }
    let w = l2.origin - l1.origin;
    let t = cross(w, e) / denom;
    let u = cross(w, d) / denom;
    if within_segment(t, len1, exclusive, cfg.eps_len) && within_segment(u, len2, exclusive, cfg.eps_len) {
        vec![l1.origin + d * t]
    } else {
        Vec::new()
    }
}

fn line_round(l: &Line, r: &Round, exclusive: bool, cfg: &GeomCfg) -> Vec<Point> {
    let d = l.end - l.origin;
    let len = d.norm();
    if len <= cfg.eps_len {
        return Vec::new();
    }
    let dir = d / len;
    // distances along the line, measured from its origin
    let s = (r.origin - l.origin).dot(&dir);
    let foot = l.origin + dir * s;
    let h = (r.origin - foot).norm();
    let along: Vec<f64> = if h > r.radius + cfg.eps_len {
        return Vec::new();
    } else if (h - r.radius).abs() <= cfg.eps_len {
        if exclusive {
            return Vec::new();
        }
        vec![s]
    } else {
        let k = (r.radius * r.radius - h * h).max(0.0).sqrt();
        vec![s - k, s + k]
    };
    along
        .into_iter()
        .filter(|&q| within_segment(q / len, len, exclusive, cfg.eps_len))
        .map(|q| l.origin + dir * q)
        .filter(|&p| r.holds(p, exclusive, cfg))
        .collect()
}

fn round_round(r1: &Round, r2: &Round, exclusive: bool, cfg: &GeomCfg) -> Vec<Point> {
    let delta = r2.origin - r1.origin;
    let d = delta.norm();
    if d <= cfg.eps_len {
        return Vec::new();
    }
    let sum = r1.radius + r2.radius;
    let diff = (r1.radius - r2.radius).abs();
    if d > sum + cfg.eps_len || d < diff - cfg.eps_len {
        return Vec::new();
    }
    let u = delta / d;
    let candidates = if (d - sum).abs() <= cfg.eps_len || (d - diff).abs() <= cfg.eps_len {
        if exclusive {
            return Vec::new();
        }
        // touching: outside each other, or r2 inside r1, meet along +u
        let outward = (d - sum).abs() <= cfg.eps_len || r1.radius > r2.radius;
        let sign = if outward { 1.0 } else { -1.0 };
        vec![r1.origin + u * (sign * r1.radius)]
    } else {
        let a = (d * d + r1.radius * r1.radius - r2.radius * r2.radius) / (2.0 * d);
        let h = (r1.radius * r1.radius - a * a).max(0.0).sqrt();
        let mid = r1.origin + u * a;
        let perp = Point::new(-u.y, u.x);
        vec![mid + perp * h, mid - perp * h]
    };
    candidates
        .into_iter()
        .filter(|&p| r1.holds(p, exclusive, cfg) && r2.holds(p, exclusive, cfg))
        .collect()
}
