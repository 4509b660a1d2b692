//! Curated surface for callers that want more than `beam` itself.
//!
//! Groups the building blocks (primitives, solvers, the per-path unit) under
//! one import path; the module layout behind it may change.

// 2D primitives
pub use crate::geom2::{
    angle_of, circle_tangent_angles, intersection, intersects, is_between_arc_angles,
    no_revolutions, path_extents, polar, Arc, Circle, Extents, GeomCfg, Line, Path, Point,
};
// Drawing tree
pub use crate::model::{route_key, Model, ModelMap, NamedMap, PathMap, WalkPath};
// Projection
pub use crate::projection::{
    beam, beam_with_cfg, divide_arc, first_is_outside, occludes, BeamOptions, BeamUnit, FlatBeam,
    Projector,
};
