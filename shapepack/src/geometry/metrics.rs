use anyhow::Result;
use float_cmp::approx_eq;

use crate::RepackError;
use crate::geometry::primitives::{Path, PathElement, Point};

/// Samples one point per drawable vertex of `path`, in a single pass.
///
/// A `Move` contributes its point. `Line` and `Curve` contribute their start only when nothing
/// has been sampled yet, followed by their control points (curves) and their end. `Close`
/// contributes nothing.
pub fn sample_points(path: &Path) -> Vec<Point> {
    let mut points = Vec::with_capacity(path.len() + 1);
    for element in path.iter() {
        match element {
            PathElement::Move(p) => points.push(*p),
            PathElement::Line { start, end } => {
                if points.is_empty() {
                    points.push(*start);
                }
                points.push(*end);
            }
            PathElement::Curve {
                start,
                end,
                control_points,
            } => {
                if points.is_empty() {
                    points.push(*start);
                }
                points.extend_from_slice(control_points);
                points.push(*end);
            }
            PathElement::Close { .. } => {}
        }
    }
    points
}

/// Arithmetic mean of `points`.
pub fn centroid(points: &[Point]) -> Result<Point> {
    if points.is_empty() {
        return Err(RepackError::EmptyGeometry.into());
    }
    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(x, y), p| (x + p.0, y + p.1));
    Ok(Point(sum_x / n, sum_y / n))
}

/// Largest Euclidean distance between `centroid` and any of `points`.
pub fn radius(points: &[Point], centroid: Point) -> Result<f64> {
    if points.is_empty() {
        return Err(RepackError::EmptyGeometry.into());
    }
    Ok(points
        .iter()
        .map(|p| p.distance(&centroid))
        .fold(0.0, f64::max))
}

/// Approximate equality of two points, tolerant to the rounding introduced by translating back and forth.
pub fn points_approx_eq(a: Point, b: Point) -> bool {
    approx_eq!(f64, a.0, b.0, epsilon = 1e-9, ulps = 4)
        && approx_eq!(f64, a.1, b.1, epsilon = 1e-9, ulps = 4)
}
