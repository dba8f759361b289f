use std::ops::{
    Add,
    Sub,
};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_2d::{GeoVector, Complex};

/// A point in the plane.
/// Has basic math support for adding and subtracting vectors.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point{x, y}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0}
    }

    /// Get the distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        (*self - *other).norm()
    }

    /// Linear blend of two points: `weight * self + (1 - weight) * other`.
    pub fn blend(&self, other: &Point, weight: f64) -> Point {
        Point{
            x: self.x * weight + other.x * (1.0 - weight),
            y: self.y * weight + other.y * (1.0 - weight),
        }
    }

    /// The point as a complex number `x + iy`.
    pub fn to_complex(&self) -> Complex {
        Complex::new(self.x, self.y)
    }

    /// Check that both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}
impl Add<GeoVector> for Point {
    type Output = Self;

    fn add(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub<GeoVector> for Point {
    type Output = Self;

    fn sub(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl Sub<Point> for Point {
    type Output = GeoVector;

    fn sub(self, rhs: Self) -> GeoVector {
        GeoVector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl std::convert::From<Complex> for Point {
    fn from(z: Complex) -> Self {
        Point{x: z.re, y: z.im}
    }
}
impl std::convert::TryFrom<&[f64]> for Point {
    type Error = String;

    /// Build a point from a raw coordinate slice (as read from a config file).
    fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
        if coords.len() != 2 {
            return Err(format!("Point must have two coordinates, got {}", coords.len()));
        }
        let point = Point::new(coords[0], coords[1]);
        if !point.is_finite() {
            return Err(format!("Point coordinates must be finite numbers, got {}", point));
        }
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn blend_weights_first_point() {
        let a = Point::new(-1.0, -1.0);
        let b = Point::new(3.0, 1.0);
        assert_eq!(a.blend(&b, 0.25), Point::new(2.0, 0.5));
        assert_eq!(a.blend(&b, 1.0), a);
    }

    #[test]
    fn point_from_coordinate_slice() {
        assert_eq!(Point::try_from(&[1.5, -2.0][..]), Ok(Point::new(1.5, -2.0)));
        assert!(Point::try_from(&[1.0][..]).is_err());
        assert!(Point::try_from(&[1.0, 2.0, 3.0][..]).is_err());
        assert!(Point::try_from(&[f64::NAN, 2.0][..]).is_err());
    }
}
