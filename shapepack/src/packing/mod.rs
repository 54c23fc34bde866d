mod diagonal;
mod row;

#[doc(inline)]
pub use diagonal::DiagonalOverflowPolicy;
#[doc(inline)]
pub use row::RowPolicy;

use std::ops::Range;

use anyhow::Result;

use crate::config::{LayoutPolicy, RepackConfig};
use crate::entities::Shape;
use crate::geometry::primitives::{Path, Point};

/// Trait for strategies that assign every shape a new centroid on the canvas.
///
/// Shapes arrive in the order they should be considered in (typically ascending radius).
/// The returned [`LayoutResult`] holds one placement per input shape, in emission order.
pub trait PackingPolicy {
    fn pack(&self, shapes: Vec<Shape>) -> Result<LayoutResult>;
}

/// Builds the policy selected in `config`.
pub fn policy_from_config(config: &RepackConfig) -> Box<dyn PackingPolicy> {
    match config.layout_policy {
        LayoutPolicy::Row => Box::new(RowPolicy {
            canvas_width: config.canvas_width,
            fudge: config.fudge_factor,
            row_key: config.secondary_row_key,
        }),
        LayoutPolicy::DiagonalOverflow => Box::new(DiagonalOverflowPolicy {
            canvas_width: config.canvas_width,
            fudge: config.fudge_factor,
        }),
    }
}

/// Horizontal room a sequence of shapes takes up when packed left to right: the first shape
/// contributes its radius, every following one twice its radius times `fudge`.
pub fn row_extent(radii: impl IntoIterator<Item = f64>, fudge: f64) -> f64 {
    radii
        .into_iter()
        .enumerate()
        .map(|(i, r)| match i {
            0 => r,
            _ => 2.0 * r * fudge,
        })
        .sum()
}

/// A shape and the centroid it was assigned
#[derive(Debug, Clone)]
pub struct Placement {
    pub shape: Shape,
    pub centroid: Point,
}

impl Placement {
    /// The shape's path, moved onto its assigned centroid
    pub fn translated_path(&self) -> Path {
        self.shape.path_centered_at(self.centroid)
    }
}

/// A horizontal band of consecutive placements
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub index: usize,
    /// Index of the first placement of this row
    pub start: usize,
    pub len: usize,
    pub y: f64,
    pub max_radius: f64,
}

impl Row {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Placements in emission order, grouped in rows
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    placements: Vec<Placement>,
    rows: Vec<Row>,
}

impl LayoutResult {
    /// Starts a new (empty) row at height `y`. Subsequent placements are added to it.
    pub fn open_row(&mut self, y: f64) {
        self.rows.push(Row {
            index: self.rows.len(),
            start: self.placements.len(),
            len: 0,
            y,
            max_radius: 0.0,
        });
    }

    /// Appends a placement to the last opened row.
    pub fn place(&mut self, shape: Shape, centroid: Point) {
        if self.rows.is_empty() {
            self.open_row(centroid.y());
        }
        if let Some(row) = self.rows.last_mut() {
            row.len += 1;
            row.max_radius = row.max_radius.max(shape.radius());
        }
        self.placements.push(Placement { shape, centroid });
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Non-empty rows, in emission order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Lowest point reached by any shape's bounding circle
    pub fn height(&self) -> f64 {
        self.placements
            .iter()
            .map(|p| p.centroid.y() + p.shape.radius())
            .fold(0.0, f64::max)
    }

    /// The translated path of every placed shape with its fill token, in emission order
    pub fn placed_paths(&self) -> impl Iterator<Item = (Path, &str)> {
        self.placements
            .iter()
            .map(|p| (p.translated_path(), p.shape.fill()))
    }
}
