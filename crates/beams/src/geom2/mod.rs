//! 2D path geometry: the primitives a drawing is made of.
//!
//! Purpose
//! - Provide lines, arcs and circles with the handful of operations the
//!   projection needs: copy/translate/scale, end points, tangent solving,
//!   intersection tests and extents.
//! - Keep every tolerance explicit (`GeomCfg`) so callers control robustness.
//!
//! Code cross-refs: `Path`, `Arc`, `GeomCfg`, `circle_tangent_angles`, `intersects`

pub mod angle;
mod extents;
mod intersect;
mod solvers;
mod types;

pub use angle::{angle_of, is_between_arc_angles, no_revolutions};
pub use extents::{path_extents, Extents};
pub use intersect::{intersection, intersects};
pub use solvers::{circle_tangent_angles, polar};
pub use types::{Arc, Circle, GeomCfg, Line, Path, Point};

#[cfg(test)]
mod tests;
