use std::iter;
use std::mem;

use anyhow::{Context, Result};
use log::debug;

use crate::config::RowKey;
use crate::entities::Shape;
use crate::geometry::primitives::Point;
use crate::packing::{LayoutResult, PackingPolicy, row_extent};
use crate::util::FPA;
use crate::util::assertions;
use crate::util::color::fill_to_intensity;

/// Buffers shapes into rows. A closed row is reordered by the secondary key (stable, ascending)
/// and packed left to right at the current height, after which the height advances by
/// `2 × fudge × max radius` of the row.
///
/// A cursor tracks the row's extent in arrival order: the first shape advances it by its radius,
/// every following one by `2 × radius × fudge`. A shape joins the open row only if the advanced
/// cursor stays within `canvas_width` and the row, packed in its reordered form, fits as well.
/// Otherwise the row is closed and the shape starts a new one, on its own if need be: an
/// oversized shape is never dropped.
#[derive(Debug, Clone, Copy)]
pub struct RowPolicy {
    pub canvas_width: f64,
    pub fudge: f64,
    pub row_key: Option<RowKey>,
}

impl RowPolicy {
    fn key(&self, shape: &Shape) -> Result<f64> {
        match self.row_key {
            None => Ok(0.0),
            Some(key) => fill_to_intensity(shape.fill(), key)
                .with_context(|| format!("no {key:?} row key for fill {:?}", shape.fill())),
        }
    }

    /// Packs `row` at height `y` and returns the height of the next row
    fn close_row(&self, row: Vec<(f64, Shape)>, y: f64, layout: &mut LayoutResult) -> f64 {
        let max_radius = row.iter().map(|(_, s)| s.radius()).fold(0.0, f64::max);
        let n_shapes = row.len();

        layout.open_row(y);
        let mut x = 0.0;
        for (i, (_, shape)) in row.into_iter().enumerate() {
            x += match i {
                0 => shape.radius(),
                _ => 2.0 * shape.radius() * self.fudge,
            };
            layout.place(shape, Point(x, y));
        }
        debug!(
            "[ROW] closed row {}: {n_shapes} shapes, extent {x:.3}, max radius {max_radius:.3}, y {y:.3}",
            layout.rows().len() - 1
        );

        y + 2.0 * self.fudge * max_radius
    }
}

/// Position at which a shape with `key` joins `row`, after every member with an equal key.
fn insertion_index(row: &[(f64, Shape)], key: f64) -> usize {
    row.partition_point(|(k, _)| *k <= key)
}

impl PackingPolicy for RowPolicy {
    fn pack(&self, shapes: Vec<Shape>) -> Result<LayoutResult> {
        let mut layout = LayoutResult::default();
        let mut row: Vec<(f64, Shape)> = vec![];
        let mut y = 0.0;
        let mut cursor = 0.0;

        for shape in shapes {
            let key = self.key(&shape)?;
            if !row.is_empty() {
                let advanced = cursor + 2.0 * shape.radius() * self.fudge;
                let pos = insertion_index(&row, key);
                let radii = row[..pos]
                    .iter()
                    .map(|(_, s)| s.radius())
                    .chain(iter::once(shape.radius()))
                    .chain(row[pos..].iter().map(|(_, s)| s.radius()));
                let reordered = row_extent(radii, self.fudge);
                if FPA(advanced) > FPA(self.canvas_width) || FPA(reordered) > FPA(self.canvas_width)
                {
                    y = self.close_row(mem::take(&mut row), y, &mut layout);
                    cursor = 0.0;
                }
            }
            cursor += match row.is_empty() {
                true => shape.radius(),
                false => 2.0 * shape.radius() * self.fudge,
            };
            let pos = insertion_index(&row, key);
            row.insert(pos, (key, shape));
        }
        if !row.is_empty() {
            self.close_row(row, y, &mut layout);
        }

        debug_assert!(assertions::rows_within_width(
            &layout,
            self.canvas_width,
            self.fudge
        ));
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RepackError;
    use crate::geometry::primitives::{Path, PathElement};

    fn disc(r: f64, fill: &str) -> Shape {
        //a diamond centred on the origin, radius r
        let pts = [Point(r, 0.0), Point(0.0, r), Point(-r, 0.0), Point(0.0, -r)];
        let mut elements = vec![PathElement::Move(pts[0])];
        for w in pts.windows(2) {
            elements.push(PathElement::Line {
                start: w[0],
                end: w[1],
            });
        }
        elements.push(PathElement::Close {
            start: pts[3],
            end: pts[0],
        });
        Shape::new(Path::new(elements), fill).unwrap()
    }

    fn policy(width: f64, fudge: f64, row_key: Option<RowKey>) -> RowPolicy {
        RowPolicy {
            canvas_width: width,
            fudge,
            row_key,
        }
    }

    fn centroids(layout: &LayoutResult) -> Vec<Point> {
        layout.placements().iter().map(|p| p.centroid).collect()
    }

    #[test]
    fn three_fit_fourth_wraps() {
        let shapes = vec![
            disc(10.0, "#000000"),
            disc(10.0, "#000000"),
            disc(10.0, "#000000"),
            disc(50.0, "#000000"),
        ];
        let layout = policy(100.0, 1.0, None).pack(shapes).unwrap();

        assert_eq!(layout.rows().len(), 2);
        assert_eq!(layout.rows()[0].len, 3);
        assert_eq!(
            centroids(&layout),
            vec![
                Point(10.0, 0.0),
                Point(30.0, 0.0),
                Point(50.0, 0.0),
                Point(50.0, 20.0)
            ]
        );
    }

    #[test]
    fn last_row_is_flushed() {
        let layout = policy(100.0, 1.1, None)
            .pack(vec![disc(5.0, "#000000")])
            .unwrap();
        assert_eq!(layout.len(), 1);
        assert_eq!(centroids(&layout), vec![Point(5.0, 0.0)]);
    }

    #[test]
    fn oversized_shape_is_placed_alone() {
        let shapes = vec![disc(1.0, "#000000"), disc(1000.0, "#000000"), disc(1.0, "#000000")];
        let layout = policy(100.0, 1.1, None).pack(shapes).unwrap();

        assert_eq!(layout.len(), 3);
        let lens: Vec<usize> = layout.rows().iter().map(|r| r.len).collect();
        assert_eq!(lens, vec![1, 1, 1]);
        assert_eq!(layout.placements()[1].centroid, Point(1000.0, 2.2));
    }

    #[test]
    fn closed_row_is_sorted_by_lightness() {
        let shapes = vec![
            disc(1.0, "#ffffff"),
            disc(1.0, "#000000"),
            disc(1.0, "#808080"),
        ];
        let layout = policy(100.0, 1.0, Some(RowKey::Lightness))
            .pack(shapes)
            .unwrap();
        let fills: Vec<&str> = layout.placements().iter().map(|p| p.shape.fill()).collect();
        assert_eq!(fills, vec!["#000000", "#808080", "#ffffff"]);
        assert_eq!(
            centroids(&layout),
            vec![Point(1.0, 0.0), Point(3.0, 0.0), Point(5.0, 0.0)]
        );
    }

    #[test]
    fn equal_keys_keep_input_order() {
        // same lightness, different radii to tell them apart
        let shapes = vec![
            disc(1.0, "#ff0000"),
            disc(2.0, "#00ff00"),
            disc(3.0, "#000000"),
            disc(4.0, "#0000ff"),
        ];
        let layout = policy(1000.0, 1.0, Some(RowKey::Lightness))
            .pack(shapes)
            .unwrap();
        let radii: Vec<f64> = layout.placements().iter().map(|p| p.shape.radius()).collect();
        assert_eq!(radii, vec![3.0, 1.0, 2.0, 4.0]);
    }

    #[test]
    fn reordered_row_stays_within_width() {
        // in input order the row would measure 40 + 20 + 20 = 80, reordered by lightness
        // (dark small discs first) it would measure 10 + 20 + 80 = 110
        let shapes = vec![
            disc(40.0, "#ffffff"),
            disc(10.0, "#000000"),
            disc(10.0, "#000000"),
        ];
        let layout = policy(100.0, 1.0, Some(RowKey::Lightness))
            .pack(shapes)
            .unwrap();
        let lens: Vec<usize> = layout.rows().iter().map(|r| r.len).collect();
        assert_eq!(lens, vec![2, 1]);
        assert!(assertions::rows_within_width(&layout, 100.0, 1.0));
    }

    #[test]
    fn arrival_order_cursor_closes_row() {
        // reordered the row would measure 40 + 80 + 20 = 140, but the cursor in arrival order
        // already reaches 10 + 80 + 80 = 170
        let shapes = vec![
            disc(10.0, "#ffffff"),
            disc(40.0, "#000000"),
            disc(40.0, "#000000"),
        ];
        let layout = policy(160.0, 1.0, Some(RowKey::Lightness))
            .pack(shapes)
            .unwrap();
        let lens: Vec<usize> = layout.rows().iter().map(|r| r.len).collect();
        assert_eq!(lens, vec![2, 1]);
        assert_eq!(
            centroids(&layout),
            vec![Point(40.0, 0.0), Point(60.0, 0.0), Point(40.0, 80.0)]
        );
    }

    #[test]
    fn malformed_fill_aborts() {
        let shapes = vec![disc(1.0, "#000000"), disc(1.0, "red")];
        let err = policy(100.0, 1.1, Some(RowKey::Hue))
            .pack(shapes)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<RepackError>(),
            Some(&RepackError::MalformedColorToken {
                token: "red".to_owned()
            })
        );
    }

    #[test]
    fn fills_are_not_inspected_without_row_key() {
        let shapes = vec![disc(1.0, "red"), disc(1.0, "")];
        assert!(policy(100.0, 1.1, None).pack(shapes).is_ok());
    }
}
