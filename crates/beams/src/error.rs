//! Input validation errors.
//!
//! Geometric absences (no tangency, a cut outside an arc, a zero-length ray)
//! are not errors; they fall through to the simpler result shape.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BeamError {
    /// Scale must be finite and positive.
    #[error("invalid scale: {0} (must be finite and > 0)")]
    InvalidScale(f64),

    /// Distance must be finite and non-negative.
    #[error("invalid distance: {0} (must be finite and >= 0)")]
    InvalidDistance(f64),

    #[error("invalid angle: {0} (must be finite)")]
    InvalidAngle(f64),
}
