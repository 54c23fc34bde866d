//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

use itertools::Itertools;
use log::error;

use crate::geometry::metrics::points_approx_eq;
use crate::geometry::primitives::{Path, Point};
use crate::packing::{LayoutResult, row_extent};
use crate::util::FPA;

pub fn translation_preserves_structure(original: &Path, moved: &Path, delta: Point) -> bool {
    if original.len() != moved.len() {
        error!(
            "translated path has {} elements, expected {}",
            moved.len(),
            original.len()
        );
        return false;
    }
    original.iter().zip(moved.iter()).all(|(a, b)| {
        a.same_kind(b)
            && a.points()
                .zip_eq(b.points())
                .all(|(pa, pb)| points_approx_eq(*pa + delta, *pb))
    })
}

/// Every row holding more than one shape has a packed extent within `canvas_width`
pub fn rows_within_width(layout: &LayoutResult, canvas_width: f64, fudge: f64) -> bool {
    layout.rows().iter().all(|row| {
        let radii = layout.placements()[row.range()]
            .iter()
            .map(|p| p.shape.radius());
        let extent = row_extent(radii, fudge);
        match row.len <= 1 || FPA(extent) <= FPA(canvas_width) {
            true => true,
            false => {
                error!(
                    "row {} has extent {:.3} exceeding canvas width {:.3}",
                    row.index, extent, canvas_width
                );
                false
            }
        }
    })
}
