//! Directed segments between two [`Point`]s.
//!
//! A [`Vector`] keeps both endpoints rather than just the displacement, so the
//! outline builder can check that consecutive edges share their joint.
use std::f64::consts::PI;
use std::fmt;

use glam::DVec2;

use crate::error::{Error, Result};
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub a: Point,
    pub b: Point,
}

impl Vector {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Builds a vector from a slice that must hold exactly two points.
    pub fn try_from_slice(points: &[Point]) -> Result<Self> {
        match points {
            [a, b] => Ok(Self::new(*a, *b)),
            _ => Err(Error::InvalidVector(format!(
                "expected exactly 2 endpoints, got {}",
                points.len()
            ))),
        }
    }

    /// Vector of `length` leaving `origin` at angle `phi` (radians, measured from +x).
    pub fn from_polar(origin: Point, phi: f64, length: f64) -> Self {
        let end = origin.translate(length * phi.cos(), length * phi.sin());
        Self::new(origin, end)
    }

    /// Component difference `b - a`.
    pub fn ab(&self) -> DVec2 {
        DVec2::from(self.b) - DVec2::from(self.a)
    }

    /// Reverse difference `a - b`.
    pub fn normal_form(&self) -> DVec2 {
        DVec2::from(self.a) - DVec2::from(self.b)
    }

    pub fn length(&self) -> f64 {
        self.ab().length()
    }

    /// Unit direction of the vector.
    ///
    /// Fails with [`Error::DegenerateVector`] when both endpoints coincide.
    pub fn heading(&self) -> Result<DVec2> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return Err(Error::DegenerateVector);
        }
        Ok(self.ab() / length)
    }

    /// Heading angle as `atan2(x, y)`.
    ///
    /// The arguments are swapped relative to the usual `atan2(y, x)`, so
    /// `PI / 2 - phi` is the conventional angle from +x that
    /// [`Vector::from_polar`] expects.
    pub fn phi(&self) -> Result<f64> {
        let heading = self.heading()?;
        Ok(heading.x.atan2(heading.y))
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.ab().dot(other.ab())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Vector {}, {}>", self.a, self.b)
    }
}

/// Angle in `[0, PI]` between two vectors.
///
/// Floating-point overshoot of the cosine is clamped into `[-1, 1]`; a
/// zero-length operand yields `PI`.
pub fn angle_between(v1: &Vector, v2: &Vector) -> f64 {
    let cos = v1.normal_form().dot(v2.normal_form()) / (v1.length() * v2.length());
    if !cos.is_finite() {
        return PI;
    }
    cos.clamp(-1.0, 1.0).acos()
}
