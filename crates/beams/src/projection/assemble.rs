//! Whole-drawing projection: one beam unit per leaf path.

use crate::error::BeamError;
use crate::geom2::GeomCfg;
use crate::model::Model;

use super::options::{BeamOptions, Projector};
use super::unit::BeamUnit;

/// Project every leaf path of `model` with default tolerances.
pub fn beam(model: &Model, options: &BeamOptions) -> Result<Model, BeamError> {
    beam_with_cfg(model, options, GeomCfg::default())
}

/// Project every leaf path of `model`.
///
/// The result holds one child model per leaf, keyed by the leaf's route key
/// and tagged with its traversal index as `layer` ("0", "1", ...). Scaling
/// is anchored at the centre of the whole drawing's extents. The input is
/// only read.
pub fn beam_with_cfg(model: &Model, options: &BeamOptions, cfg: GeomCfg) -> Result<Model, BeamError> {
    options.validate()?;
    let mut result = Model::new();
    let Some(extents) = model.extents() else {
        tracing::debug!("no paths to project");
        return Ok(result);
    };
    let center = extents.center();
    let projector = Projector::new(options, center, cfg);

    let mut layer = 0usize;
    let mut splits = 0usize;
    model.walk(|leaf| {
        let unit = BeamUnit::build(leaf.path, leaf.offset, &projector);
        if unit.is_split() {
            splits += 1;
        }
        let mut child = unit.to_model();
        child.layer = Some(layer.to_string());
        result.models.insert(leaf.route_key, child);
        layer += 1;
    });
    tracing::debug!(
        leaves = layer,
        splits,
        center_x = center.x,
        center_y = center.y,
        "beam"
    );
    Ok(result)
}
