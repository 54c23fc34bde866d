use std::ops::{Add, Neg, Sub};

use crate::geometry::geo_traits::Translatable;

/// Geometric primitive representing a point, or a displacement vector
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl Translatable for Point {
    fn translate(&mut self, delta: Point) -> &mut Self {
        self.0 += delta.0;
        self.1 += delta.1;
        self
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point(-self.0, -self.1)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Point(1.0, 2.0);
        let b = Point(4.0, 6.0);
        assert_eq!(a + b, Point(5.0, 8.0));
        assert_eq!(b - a, Point(3.0, 4.0));
        assert_eq!(-a, Point(-1.0, -2.0));
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.sq_distance(&b), 25.0);
    }

    #[test]
    fn translate_in_place_and_clone() {
        let mut p = Point(1.0, 1.0);
        let moved = p.translate_clone(Point(2.0, -3.0));
        assert_eq!(p, Point(1.0, 1.0));
        assert_eq!(moved, Point(3.0, -2.0));

        p.translate(Point(2.0, -3.0));
        assert_eq!(p, moved);
    }
}
