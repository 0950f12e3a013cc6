//! 2D point value type.
use std::fmt;

use glam::DVec2;

/// A position on the canvas. Canvas coordinates grow right (`x`) and down (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Returns a new point offset by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// True iff the point lies inside `[0, max_x] x [0, max_y]`, edges included.
    pub fn within_limits(&self, max_x: f64, max_y: f64) -> bool {
        (0.0..=max_x).contains(&self.x) && (0.0..=max_y).contains(&self.y)
    }

    /// True iff `other` is strictly closer than `radius`.
    pub fn within_perimeter(&self, other: &Point, radius: f64) -> bool {
        self.distance(other) < radius
    }

    pub fn distance(&self, other: &Point) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for mint::Point2<f64> {
    fn from(p: Point) -> Self {
        mint::Point2 { x: p.x, y: p.y }
    }
}

impl From<mint::Point2<f64>> for Point {
    fn from(p: mint::Point2<f64>) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_returns_new_point() {
        let p = Point::new(1.0, 2.0);
        let q = p.translate(3.0, -4.0);
        assert_eq!(q, Point::new(4.0, -2.0));
        assert_eq!(p, Point::new(1.0, 2.0));
    }

    #[test]
    fn setters_mutate_in_place() {
        let mut p = Point::ORIGIN;
        p.set_x(7.5);
        p.set_y(-1.0);
        assert_eq!(p, Point::new(7.5, -1.0));
    }

    #[test]
    fn within_limits_is_inclusive_on_both_edges() {
        assert!(Point::new(0.0, 0.0).within_limits(10.0, 20.0));
        assert!(Point::new(10.0, 20.0).within_limits(10.0, 20.0));
        assert!(Point::new(5.0, 20.0).within_limits(10.0, 20.0));
        assert!(!Point::new(-0.001, 5.0).within_limits(10.0, 20.0));
        assert!(!Point::new(10.001, 5.0).within_limits(10.0, 20.0));
        assert!(!Point::new(5.0, 20.5).within_limits(10.0, 20.0));
        assert!(!Point::new(f64::NAN, 5.0).within_limits(10.0, 20.0));
    }

    #[test]
    fn within_perimeter_is_strict() {
        let center = Point::new(0.0, 0.0);
        assert!(Point::new(2.9, 0.0).within_perimeter(&center, 3.0));
        assert!(!Point::new(3.0, 0.0).within_perimeter(&center, 3.0));
        assert!(!Point::new(0.0, 4.0).within_perimeter(&center, 3.0));
        // 3-4-5 triangle lands exactly on the radius.
        assert!(!Point::new(3.0, 4.0).within_perimeter(&center, 5.0));
    }

    #[test]
    fn conversions_round_trip_through_glam_and_mint() {
        let p = Point::new(1.5, -2.5);
        let v: DVec2 = p.into();
        assert_eq!(v, DVec2::new(1.5, -2.5));
        let m: mint::Point2<f64> = p.into();
        assert_eq!(Point::from(m), p);
    }

    #[test]
    fn display_matches_angle_bracket_form() {
        assert_eq!(Point::new(1.0, 2.5).to_string(), "<1, 2.5>");
    }
}
