use anyhow::Result;

use crate::geometry::geo_traits::Translatable;
use crate::geometry::metrics;
use crate::geometry::primitives::{Path, Point};
use crate::util::assertions;

/// A path together with its fill token.
///
/// Shapes are immutable: the geometric properties are derived once, at construction, and stay
/// valid for the lifetime of the value. Relocating a shape produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    path: Path,
    fill: String,
    sample_points: Vec<Point>,
    centroid: Point,
    radius: f64,
}

impl Shape {
    /// Creates a shape, failing with [`EmptyGeometry`](crate::RepackError::EmptyGeometry) if
    /// the path has no drawable vertex.
    pub fn new(path: Path, fill: impl Into<String>) -> Result<Self> {
        let sample_points = metrics::sample_points(&path);
        let centroid = metrics::centroid(&sample_points)?;
        let radius = metrics::radius(&sample_points, centroid)?;

        Ok(Self {
            path,
            fill: fill.into(),
            sample_points,
            centroid,
            radius,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The opaque fill token, as it appeared in the source document
    pub fn fill(&self) -> &str {
        &self.fill
    }

    pub fn sample_points(&self) -> &[Point] {
        &self.sample_points
    }

    /// Arithmetic mean of the sample points
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Maximum distance from the centroid to any sample point
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The path moved rigidly so that its centroid lands on `new_centroid`.
    pub fn path_centered_at(&self, new_centroid: Point) -> Path {
        let moved = self.path.translate_clone(new_centroid - self.centroid);
        debug_assert!(assertions::translation_preserves_structure(
            &self.path,
            &moved,
            new_centroid - self.centroid
        ));
        moved
    }

    /// A sibling shape with the same fill, moved so that its centroid lands on `new_centroid`.
    pub fn centered_at(&self, new_centroid: Point) -> Shape {
        let delta = new_centroid - self.centroid;
        Shape {
            path: self.path_centered_at(new_centroid),
            fill: self.fill.clone(),
            sample_points: self.sample_points.iter().map(|p| *p + delta).collect(),
            centroid: new_centroid,
            radius: self.radius,
        }
    }
}
