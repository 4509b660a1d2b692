//! Drawing tree: named paths plus named child models.
//!
//! Purpose
//! - Hold a drawing the way the host format lays it out: every model has an
//!   optional `origin` (offsetting everything below it), an optional `layer`
//!   tag, a map of paths and a map of child models.
//! - Traverse it deterministically (`walk`) and measure it (`extents`).
//!
//! Conventions
//! - Maps keep insertion order; traversal visits a model's own paths before
//!   descending into its child models, depth-first.
//! - Routes alternate collection name and id (`["models", "a", "paths", "p"]`)
//!   and render as route keys like `models["a"].paths["p"]`.
//!
//! Code cross-refs: `geom2::{Path, Extents, path_extents}`, `ordered::NamedMap`

mod ordered;

use serde::{Deserialize, Serialize};

use crate::geom2::{path_extents, Extents, Path, Point};

pub use ordered::NamedMap;

pub type PathMap = NamedMap<Path>;
pub type ModelMap = NamedMap<Model>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    #[serde(default, skip_serializing_if = "NamedMap::is_empty")]
    pub paths: PathMap,
    #[serde(default, skip_serializing_if = "NamedMap::is_empty")]
    pub models: ModelMap,
}

/// One leaf visited by `Model::walk`.
#[derive(Clone, Debug)]
pub struct WalkPath<'a> {
    pub path_id: &'a str,
    pub path: &'a Path,
    /// Sum of the `origin`s from the root down to the path's model.
    pub offset: Point,
    pub route: Vec<String>,
    pub route_key: String,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, id: impl Into<String>, path: impl Into<Path>) -> Self {
        self.paths.insert(id, path.into());
        self
    }

    pub fn with_model(mut self, id: impl Into<String>, model: Model) -> Self {
        self.models.insert(id, model);
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Visit every leaf path, depth-first in insertion order.
    pub fn walk<F>(&self, mut on_path: F)
    where
        F: FnMut(WalkPath<'_>),
    {
        let mut route = Vec::new();
        self.walk_inner(Point::zeros(), &mut route, &mut on_path);
    }

    fn walk_inner<F>(&self, offset: Point, route: &mut Vec<String>, on_path: &mut F)
    where
        F: FnMut(WalkPath<'_>),
    {
        let offset = offset + self.origin.unwrap_or_else(Point::zeros);
        for (id, path) in self.paths.iter() {
            route.push("paths".to_string());
            route.push(id.to_string());
            on_path(WalkPath {
                path_id: id,
                path,
                offset,
                route: route.clone(),
                route_key: route_key(route),
            });
            route.truncate(route.len() - 2);
        }
        for (id, child) in self.models.iter() {
            route.push("models".to_string());
            route.push(id.to_string());
            child.walk_inner(offset, route, on_path);
            route.truncate(route.len() - 2);
        }
    }

    /// Extents of every path in the tree, origins applied. None when the tree has no paths.
    pub fn extents(&self) -> Option<Extents> {
        let mut acc: Option<Extents> = None;
        self.walk(|leaf| {
            let e = path_extents(leaf.path).translated(leaf.offset);
            acc = Some(match acc {
                Some(prev) => prev.union(&e),
                None => e,
            });
        });
        acc
    }

    /// Number of leaf paths in the tree.
    pub fn path_count(&self) -> usize {
        self.paths.len() + self.models.values().map(Model::path_count).sum::<usize>()
    }
}

/// Render a route as `paths["p"]` / `models["a"].paths["p"]`.
pub fn route_key(route: &[String]) -> String {
    let mut key = String::new();
    for (i, segment) in route.iter().enumerate() {
        if i % 2 == 0 {
            if i > 0 {
                key.push('.');
            }
            key.push_str(segment);
        } else {
            // Ids are quoted the way JSON writes strings.
            key.push('[');
            key.push_str(&serde_json::Value::from(segment.as_str()).to_string());
            key.push(']');
        }
    }
    key
}
