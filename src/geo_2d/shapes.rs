use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_2d::{Point, GeoVector};

/// A circle.
/// The radius is always stored positive; an enclosing (inverted) circle
/// is only inverted inside the solver.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}
impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Circle{center, radius}
    }

    /// Bend (signed curvature) of the circle.
    /// Negative when the circle encloses its tangent neighbours.
    pub fn bend(&self, enclosing: bool) -> f64 {
        if enclosing {
            -1.0 / self.radius
        }
        else {
            1.0 / self.radius
        }
    }

    /// Check that the center and radius are finite.
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Error in external tangency against another circle:
    /// how far the center distance is from the sum of the radii.
    pub fn tangency_error(&self, other: &Circle) -> f64 {
        (self.center.distance(&other.center) - (self.radius + other.radius)).abs()
    }
}
impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "Circle[{:.*}, r = {:.*}]", precision, self.center, precision, self.radius)
    }
}

/// A straight boundary segment between two end points.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Line {
    pub end1: Point,
    pub end2: Point,
}
impl Line {
    /// Create a new line.
    pub fn new(end1: Point, end2: Point) -> Self {
        Line{end1, end2}
    }

    /// Unit vector pointing from `end1` to `end2`.
    pub fn direction(&self) -> GeoVector {
        (self.end2 - self.end1).normalize()
    }

    /// Distance from a point to the infinite line through the segment.
    pub fn distance_to_point(&self, point: &Point) -> f64 {
        self.direction().cross(&(*point - self.end1)).abs()
    }
}
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "Line[{:.*} -> {:.*}]", precision, self.end1, precision, self.end2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_circles_have_no_tangency_error() {
        let a = Circle::new(Point::new(0.0, 0.0), 1.0);
        let b = Circle::new(Point::new(3.0, 0.0), 2.0);
        assert_eq!(a.tangency_error(&b), 0.0);
        assert_eq!(a.tangency_error(&Circle::new(Point::new(4.0, 0.0), 2.0)), 1.0);
    }

    #[test]
    fn enclosing_bend_is_negative() {
        let circle = Circle::new(Point::zero(), 4.0);
        assert_eq!(circle.bend(false), 0.25);
        assert_eq!(circle.bend(true), -0.25);
    }

    #[test]
    fn point_line_distance() {
        let line = Line::new(Point::new(0.0, 1.0), Point::new(2.0, 1.0));
        assert_eq!(line.distance_to_point(&Point::new(5.0, 4.0)), 3.0);
        let reversed = Line::new(line.end2, line.end1);
        assert_eq!(reversed.distance_to_point(&Point::new(-1.0, -1.0)), 2.0);
    }
}
