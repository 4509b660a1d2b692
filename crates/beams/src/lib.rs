//! Beam projection of 2D drawings.
//!
//! A drawing (`model::Model`) is a tree of lines, arcs and circles. `beam`
//! produces a derived drawing in which every path is replaced by an
//! assembly: the path itself (`base`), a scaled and displaced copy
//! (`beam`), and the rays joining their end points. Arcs and circles whose
//! copy has outer tangents with them are split at the tangent points into a
//! visible (`outside`) and a hidden (`inside`) piece.
//!
//! Layout
//! - `geom2`: path primitives, tangent solving, intersections, extents.
//! - `model`: the drawing tree and its traversal.
//! - `projection`: arc splitting, occlusion, beam units, whole-drawing assembly.

pub mod api;
pub mod error;
pub mod geom2;
pub mod model;
pub mod projection;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::BeamError;
pub use projection::{beam, beam_with_cfg, BeamOptions};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::BeamError;
    pub use crate::geom2::{Arc, Circle, GeomCfg, Line, Path, Point};
    pub use crate::model::Model;
    pub use crate::projection::{beam, beam_with_cfg, BeamOptions, BeamUnit};
    pub use nalgebra::Vector2 as Vec2;
}
