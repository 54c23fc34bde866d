use anyhow::Result;
use log::{info, warn};
use ordered_float::OrderedFloat;

use crate::config::{RepackConfig, SortKey};
use crate::entities::Shape;
use crate::packing::{LayoutResult, policy_from_config};

/// Relocates `shapes` onto a fresh canvas as configured by `config`.
///
/// Shapes beyond `max_shapes` are ignored. The remainder is ordered by the configured sort key
/// (stable) and handed to the configured packing policy. Any failure aborts the whole run:
/// there is no partial layout.
pub fn repack(mut shapes: Vec<Shape>, config: &RepackConfig) -> Result<LayoutResult> {
    config.validate()?;

    if shapes.len() > config.max_shapes {
        info!(
            "[REPACK] ignoring {} shapes beyond max_shapes ({})",
            shapes.len() - config.max_shapes,
            config.max_shapes
        );
        shapes.truncate(config.max_shapes);
    }

    match config.sort_key {
        SortKey::AscendingRadius => shapes.sort_by_key(|s| OrderedFloat(s.radius())),
        SortKey::DeclarationOrder => {}
    }

    let layout = policy_from_config(config).pack(shapes)?;

    info!(
        "[REPACK] placed {} shapes in {} rows ({:?}), height: {:.3}",
        layout.len(),
        layout.rows().len(),
        config.layout_policy,
        layout.height()
    );
    if layout.height() > config.canvas_height {
        warn!(
            "[REPACK] layout height {:.3} exceeds canvas height {:.3}, shapes will be cut off",
            layout.height(),
            config.canvas_height
        );
    }

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RepackError;
    use crate::config::LayoutPolicy;
    use crate::geometry::primitives::{Path, PathElement, Point};

    fn segment(r: f64, fill: &str) -> Shape {
        let path = Path::new(vec![
            PathElement::Move(Point(-r, 0.0)),
            PathElement::Line {
                start: Point(-r, 0.0),
                end: Point(r, 0.0),
            },
        ]);
        Shape::new(path, fill).unwrap()
    }

    fn radii(layout: &LayoutResult) -> Vec<f64> {
        layout.placements().iter().map(|p| p.shape.radius()).collect()
    }

    #[test]
    fn sorts_by_ascending_radius() {
        let config = RepackConfig {
            secondary_row_key: None,
            ..Default::default()
        };
        let shapes = vec![segment(3.0, ""), segment(1.0, ""), segment(2.0, "")];
        let layout = repack(shapes, &config).unwrap();
        assert_eq!(radii(&layout), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn declaration_order_is_kept() {
        let config = RepackConfig {
            sort_key: SortKey::DeclarationOrder,
            layout_policy: LayoutPolicy::DiagonalOverflow,
            ..Default::default()
        };
        let shapes = vec![segment(3.0, ""), segment(1.0, ""), segment(2.0, "")];
        let layout = repack(shapes, &config).unwrap();
        assert_eq!(radii(&layout), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn truncates_to_max_shapes() {
        let config = RepackConfig {
            max_shapes: 2,
            sort_key: SortKey::DeclarationOrder,
            ..Default::default()
        };
        let shapes = vec![
            segment(3.0, "#000000"),
            segment(1.0, "#000000"),
            segment(2.0, "#000000"),
        ];
        let layout = repack(shapes, &config).unwrap();
        assert_eq!(radii(&layout), vec![3.0, 1.0]);
    }

    #[test]
    fn invalid_config_is_rejected_before_packing() {
        let config = RepackConfig {
            fudge_factor: 0.5,
            ..Default::default()
        };
        let err = repack(vec![segment(1.0, "#000000")], &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RepackError>(),
            Some(RepackError::InvalidConfig { .. })
        ));
    }
}
