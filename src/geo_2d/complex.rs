use std::ops::{
    Add,
    Sub,
    Mul,
    Div,
};

/// A complex number.
/// Used for the center-bend products of the complex Descartes theorem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}
impl Complex {
    /// Create a new complex number.
    pub fn new(re: f64, im: f64) -> Self {
        Complex{re, im}
    }

    /// Create a new zero.
    pub fn zero() -> Self {
        Complex{re: 0.0, im: 0.0}
    }

    /// Modulus `|z|`.
    pub fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Principal square root.
    /// Uses the half-angle form so neither component suffers cancellation.
    pub fn sqrt(&self) -> Complex {
        let modulus = self.abs();
        if modulus == 0.0 {
            return Complex::zero();
        }
        let t = ((modulus + self.re.abs()) / 2.0).sqrt();
        if self.re >= 0.0 {
            Complex{re: t, im: self.im / (2.0 * t)}
        }
        else {
            Complex{re: self.im.abs() / (2.0 * t), im: t.copysign(self.im)}
        }
    }
}
impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Complex{
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}
impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Complex{
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}
impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Complex{
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}
impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex{
            re: self * other.re,
            im: self * other.im,
        }
    }
}
impl Div<f64> for Complex {
    type Output = Complex;

    fn div(self, other: f64) -> Complex {
        Complex{
            re: self.re / other,
            im: self.im / other,
        }
    }
}
