use std::ops::{
    Add,
    Sub,
    Mul,
    Div,
};
use std::fmt;

use crate::geo_2d::Complex;

/// A vector in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoVector {
    pub x: f64,
    pub y: f64,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(x: f64, y: f64) -> Self {
        GeoVector{x, y}
    }

    /// Normalize and return a new vector.
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        GeoVector{
            x: self.x / mag,
            y: self.y / mag,
        }
    }

    /// Get the z component of the cross product of two vectors.
    pub fn cross(&self, other: &GeoVector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Rotate a quarter turn counter-clockwise.
    pub fn perp(&self) -> GeoVector {
        GeoVector{x: -self.y, y: self.x}
    }

    /// The vector as a complex number `x + iy`.
    pub fn to_complex(&self) -> Complex {
        Complex::new(self.x, self.y)
    }
}
impl Add for GeoVector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        GeoVector{
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}
impl Sub for GeoVector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        GeoVector{
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}
impl Mul<f64> for GeoVector {
    type Output = GeoVector;

    fn mul(self, other: f64) -> GeoVector {
        GeoVector{
            x: self.x * other,
            y: self.y * other,
        }
    }
}
impl Div<f64> for GeoVector {
    type Output = GeoVector;

    fn div(self, other: f64) -> GeoVector {
        GeoVector{
            x: self.x / other,
            y: self.y / other,
        }
    }
}
impl std::ops::Neg for GeoVector {
    type Output = GeoVector;

    fn neg(self) -> GeoVector {
        GeoVector{
            x: -self.x,
            y: -self.y,
        }
    }
}
impl fmt::Display for GeoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}
