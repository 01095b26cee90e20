//! Points and 2-D vector math.
//!
//! A [`Point`] doubles as a displacement vector: `b - a` is the vector from
//! `a` to `b`. All functions here are pure.

use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A touch sample (or a displacement between two samples).
///
/// Equality and hashing compare the raw bit patterns of both coordinates, so
/// `+0.0` and `-0.0` are different points and a NaN coordinate is equal to
/// itself when the bits match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        length(other - self)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Length (magnitude) of the vector `v`.
pub fn length(v: Point) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

pub fn dot_product(a: Point, b: Point) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Z component of the 3-D cross product of `a` and `b` lifted into the plane.
pub fn cross_product(a: Point, b: Point) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Signed angle from `v1` to `v2` in radians, using precomputed products.
///
/// The result lies in `(-PI, PI]`. Positive angles turn clockwise in screen
/// coordinates (y grows downward).
///
/// Returns NaN when the `asin` argument leaves `[-1, 1]`, which happens for
/// zero-length vectors (`0 / 0`) and for near-collinear vectors whose ratio
/// rounds past 1. Callers decide what NaN means for them.
pub fn angle_between(dot: f64, cross: f64, v1: Point, v2: Point) -> f64 {
    let theta = (cross / (length(v1) * length(v2))).asin();

    if dot < 0.0 {
        if cross >= 0.0 { PI - theta } else { -PI - theta }
    } else {
        theta
    }
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    (180.0 * radians) / PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turns_have_the_expected_sign() {
        let right = Point::new(10.0, 0.0);
        let down = Point::new(0.0, 10.0);
        let up = Point::new(0.0, -10.0);

        let cw = angle_between(dot_product(right, down), cross_product(right, down), right, down);
        let ccw = angle_between(dot_product(right, up), cross_product(right, up), right, up);

        assert_eq!(cw, PI / 2.0);
        assert_eq!(ccw, -PI / 2.0);
    }

    #[test]
    fn obtuse_turns_are_quadrant_corrected() {
        let a = Point::new(10.0, 0.0);
        let b = Point::new(-10.0, 10.0);

        let theta = angle_between(dot_product(a, b), cross_product(a, b), a, b);
        assert!((theta - 3.0 * PI / 4.0).abs() < 1e-12, "got {theta}");

        let c = Point::new(-10.0, -10.0);
        let theta = angle_between(dot_product(a, c), cross_product(a, c), a, c);
        assert!((theta + 3.0 * PI / 4.0).abs() < 1e-12, "got {theta}");
    }

    #[test]
    fn reversal_is_a_half_turn() {
        let a = Point::new(10.0, 0.0);
        let b = Point::new(-10.0, 0.0);

        assert_eq!(angle_between(dot_product(a, b), cross_product(a, b), a, b), PI);
    }

    #[test]
    fn zero_length_vector_yields_nan() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);

        assert!(angle_between(dot_product(a, b), cross_product(a, b), a, b).is_nan());
    }

    #[test]
    fn degrees() {
        assert!((radians_to_degrees(PI) - 180.0).abs() < 1e-9);
        assert!((radians_to_degrees(-PI / 2.0) + 90.0).abs() < 1e-9);
    }
}
