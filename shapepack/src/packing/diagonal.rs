use anyhow::Result;
use log::debug;

use crate::entities::Shape;
use crate::geometry::primitives::Point;
use crate::packing::{LayoutResult, PackingPolicy};
use crate::util::FPA;

/// Single pass policy: every shape is placed as soon as it arrives, no buffering and no reordering.
///
/// The cursor advances by `2 × fudge × radius` per shape. When `x + radius` of the incoming
/// shape would exceed `canvas_width`, the cursor wraps: `x` resets to the shape's radius and `y`
/// advances by `2 × fudge × radius` of that same shape.
#[derive(Debug, Clone, Copy)]
pub struct DiagonalOverflowPolicy {
    pub canvas_width: f64,
    pub fudge: f64,
}

impl PackingPolicy for DiagonalOverflowPolicy {
    fn pack(&self, shapes: Vec<Shape>) -> Result<LayoutResult> {
        let mut layout = LayoutResult::default();
        let (mut x, mut y) = (0.0, 0.0);

        for shape in shapes {
            let r = shape.radius();
            if FPA(x + r) > FPA(self.canvas_width) {
                x = r;
                y += 2.0 * self.fudge * r;
                debug!("[DIAG] wrapped at shape with radius {r:.3}, y {y:.3}");
                layout.open_row(y);
            } else {
                x += 2.0 * self.fudge * r;
            }
            layout.place(shape, Point(x, y));
        }

        Ok(layout)
    }
}
