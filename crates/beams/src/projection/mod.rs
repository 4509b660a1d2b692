//! Beam projection: a scaled, displaced copy of every path, joined to the
//! original by rays, with self-occluding arcs and circles split into visible
//! (`outside`) and hidden (`inside`) halves.
//!
//! Pipeline
//! - `assemble::beam` walks the drawing and builds one `BeamUnit` per leaf.
//! - `unit::BeamUnit::build` places the base and projected copy, finds the
//!   outer tangent angles for arcs and circles, and splits there.
//! - `divide::divide_arc` cuts arcs; `occlusion` decides which piece hides the other.
//!
//! Code cross-refs: `geom2::{circle_tangent_angles, intersects}`, `model::Model`

mod assemble;
mod divide;
mod occlusion;
mod options;
mod unit;

pub use assemble::{beam, beam_with_cfg};
pub use divide::divide_arc;
pub use occlusion::{first_is_outside, occludes};
pub use options::{BeamOptions, Projector};
pub use unit::{BeamUnit, FlatBeam};
