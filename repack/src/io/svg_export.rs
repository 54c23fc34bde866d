//! Serialization of a layout into a fresh SVG document.

use anyhow::{Context, Result};
use log::debug;
use shapepack::RepackError;
use shapepack::config::RepackConfig;
use shapepack::geometry::primitives::{Path, PathElement, Point};
use shapepack::packing::LayoutResult;
use svg::Document;
use svg::node::Comment;
use svg::node::element::path::{Data, Number};

/// Builds the output document: an envelope of the configured size holding one `<path>` per
/// placement, in emission order, each row preceded by a comment describing it.
pub fn layout_to_svg(layout: &LayoutResult, config: &RepackConfig) -> Result<Document> {
    let (width, height) = (config.canvas_width, config.canvas_height);
    let mut document = Document::new()
        .set("version", "1.1")
        .set("viewBox", format!("0 0 {width} {height}"))
        .set("width", format!("{width}pt"))
        .set("height", format!("{height}pt"));

    for row in layout.rows() {
        document = document.add(Comment::new(format!(
            "row {}: {} shapes, max radius {:.3}",
            row.index, row.len, row.max_radius
        )));
        for (i, placement) in layout.placements()[row.range()].iter().enumerate() {
            let data = path_data(&placement.translated_path())
                .with_context(|| format!("could not encode shape {} of row {}", i, row.index))?;
            document = document.add(data_to_path(data, placement.shape.fill()));
        }
    }
    debug!(
        "[EXPORT] built document with {} paths in {} rows",
        layout.len(),
        layout.rows().len()
    );

    Ok(document)
}

/// Encodes `path` in the path mini-language.
///
/// A segment whose start does not continue from the current point is preceded by a moveto.
/// Curves with one control point become quadratic curves, with two cubic ones.
pub fn path_data(path: &Path) -> Result<Data> {
    let mut data = Data::new();
    let mut current: Option<Point> = None;

    for element in path.iter() {
        data = match element {
            PathElement::Move(p) => {
                current = Some(*p);
                data.move_to(coords(&[*p]))
            }
            PathElement::Line { start, end } => {
                let data = continue_from(data, current, *start);
                current = Some(*end);
                data.line_to(coords(&[*end]))
            }
            PathElement::Curve {
                start,
                end,
                control_points,
            } => {
                let data = continue_from(data, current, *start);
                current = Some(*end);
                match control_points.as_slice() {
                    [c] => data.quadratic_curve_to(coords(&[*c, *end])),
                    [c1, c2] => data.cubic_curve_to(coords(&[*c1, *c2, *end])),
                    other => {
                        return Err(RepackError::UnrepresentableCurve {
                            n_control_points: other.len(),
                        }
                        .into());
                    }
                }
            }
            PathElement::Close { end, .. } => {
                current = Some(*end);
                data.close()
            }
        };
    }
    Ok(data)
}

fn continue_from(data: Data, current: Option<Point>, start: Point) -> Data {
    match current == Some(start) {
        true => data,
        false => data.move_to(coords(&[start])),
    }
}

/// Path data numbers are `f32`: coordinates are written with single precision, about 7
/// significant digits.
fn coords(points: &[Point]) -> Vec<Number> {
    points
        .iter()
        .flat_map(|p| [p.x() as Number, p.y() as Number])
        .collect()
}

pub fn data_to_path(data: Data, fill: &str) -> svg::node::element::Path {
    svg::node::element::Path::new()
        .set("d", data)
        .set("fill", fill)
}
