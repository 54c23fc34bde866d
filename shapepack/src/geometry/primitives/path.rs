use std::mem::discriminant;

use crate::geometry::geo_traits::Translatable;
use crate::geometry::primitives::Point;

/// A single drawing primitive of a [`Path`].
#[derive(Debug, Clone, PartialEq)]
pub enum PathElement {
    /// Lifts the pen and puts it down at the given point
    Move(Point),
    /// Straight segment
    Line { start: Point, end: Point },
    /// Bézier curve with an arbitrary number (at least one) of control points, in order
    Curve {
        start: Point,
        end: Point,
        control_points: Vec<Point>,
    },
    /// Segment closing the current subpath, from the current point back to the subpath start
    Close { start: Point, end: Point },
}

impl PathElement {
    /// All points held by this element: start, control points (in order) and end.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        let (head, controls, tail): (Option<&Point>, &[Point], Option<&Point>) = match self {
            PathElement::Move(p) => (Some(p), &[], None),
            PathElement::Line { start, end } | PathElement::Close { start, end } => {
                (Some(start), &[], Some(end))
            }
            PathElement::Curve {
                start,
                end,
                control_points,
            } => (Some(start), control_points.as_slice(), Some(end)),
        };
        head.into_iter().chain(controls.iter()).chain(tail)
    }

    /// Returns true if both elements are of the same variant (and curves have equally many control points).
    pub fn same_kind(&self, other: &PathElement) -> bool {
        match (self, other) {
            (
                PathElement::Curve { control_points: a, .. },
                PathElement::Curve { control_points: b, .. },
            ) => a.len() == b.len(),
            _ => discriminant(self) == discriminant(other),
        }
    }
}

impl Translatable for PathElement {
    fn translate(&mut self, delta: Point) -> &mut Self {
        match self {
            PathElement::Move(p) => {
                p.translate(delta);
            }
            PathElement::Line { start, end } | PathElement::Close { start, end } => {
                start.translate(delta);
                end.translate(delta);
            }
            PathElement::Curve {
                start,
                end,
                control_points,
            } => {
                start.translate(delta);
                control_points.iter_mut().for_each(|c| {
                    c.translate(delta);
                });
                end.translate(delta);
            }
        }
        self
    }
}

/// Ordered sequence of [`PathElement`]s, as decoded from the path mini-language.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    pub fn new(elements: Vec<PathElement>) -> Self {
        debug_assert!(
            elements.iter().all(|e| match e {
                PathElement::Curve { control_points, .. } => !control_points.is_empty(),
                _ => true,
            }),
            "curve without control points: {:?}",
            elements
        );
        Self { elements }
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Translatable for Path {
    fn translate(&mut self, delta: Point) -> &mut Self {
        self.elements.iter_mut().for_each(|e| {
            e.translate(delta);
        });
        self
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<T: IntoIterator<Item = PathElement>>(iter: T) -> Self {
        Path::new(iter.into_iter().collect())
    }
}
