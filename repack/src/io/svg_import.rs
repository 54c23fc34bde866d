//! Extraction of shapes from the `<path>` elements of an SVG document.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use shapepack::entities::Shape;
use svg::node::element::tag;
use svg::parser::Event;

use crate::io::path_data;

/// Reads the shapes of every `<path>` element in `content`, in document order.
///
/// Reading stops once `max_shapes` shapes have been collected. A missing `fill` attribute
/// yields an empty fill token, a path without any drawable vertex aborts the read.
pub fn read_shapes(content: &str, max_shapes: usize) -> Result<Vec<Shape>> {
    let mut shapes = vec![];

    for event in svg::read(content).context("could not parse svg document")? {
        let Event::Tag(tag::Path, tag_type, attributes) = event else {
            continue;
        };
        if matches!(tag_type, tag::Type::End) {
            continue;
        }
        if shapes.len() == max_shapes {
            info!("[IMPORT] reached max_shapes ({max_shapes}), ignoring remaining paths");
            break;
        }

        let idx = shapes.len();
        let d = attributes.get("d").map(|v| v.to_string()).unwrap_or_default();
        let fill = attributes
            .get("fill")
            .map(|v| v.to_string())
            .unwrap_or_default();

        let path = path_data::decode(&d).with_context(|| format!("could not decode path {idx}"))?;
        let shape = Shape::new(path, fill).with_context(|| format!("path {idx} has no geometry"))?;
        debug!(
            "[IMPORT] path {idx}: {} elements, centroid ({:.3}, {:.3}), radius {:.3}, fill {:?}",
            shape.path().len(),
            shape.centroid().x(),
            shape.centroid().y(),
            shape.radius(),
            shape.fill()
        );
        shapes.push(shape);
    }

    match shapes.is_empty() {
        true => warn!("[IMPORT] document contains no <path> elements"),
        false => info!("[IMPORT] read {} shapes", shapes.len()),
    }
    Ok(shapes)
}
