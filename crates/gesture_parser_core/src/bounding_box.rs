use serde::Serialize;

use crate::geometry::Point;

/// Width/height ratio at or under which a box counts as narrow (either axis).
pub const NARROWNESS_THRESHOLD: f64 = 0.2;

/// Height at or under this share of the width makes a box short.
pub const SHORTNESS_THRESHOLD: f64 = 0.5;

/// Width at or under this share of the height makes a box wide.
pub const WIDENESS_THRESHOLD: f64 = 0.5;

/// Axis-aligned box enclosing a gesture, as an upper-left and a lower-right
/// corner (screen coordinates, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    upper_left: Point,
    lower_right: Point,
}

impl BoundingBox {
    /// Encloses `points` in a single pass. `None` when `points` is empty.
    ///
    /// A box built from one point (or several identical ones) has zero width
    /// and height, which makes every shape predicate true.
    pub fn compute(points: &[Point]) -> Option<Self> {
        let first = points.first()?;

        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;

        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        Some(Self {
            upper_left: Point::new(min_x, min_y),
            lower_right: Point::new(max_x, max_y),
        })
    }

    pub fn upper_left(&self) -> Point {
        self.upper_left
    }

    pub fn lower_right(&self) -> Point {
        self.lower_right
    }

    pub fn width(&self) -> f64 {
        self.lower_right.x - self.upper_left.x
    }

    pub fn height(&self) -> f64 {
        self.lower_right.y - self.upper_left.y
    }

    /// Very thin along either axis.
    pub fn is_narrow(&self) -> bool {
        self.width() <= self.height() * NARROWNESS_THRESHOLD
            || self.height() <= self.width() * NARROWNESS_THRESHOLD
    }

    pub fn is_short(&self) -> bool {
        self.height() <= self.width() * SHORTNESS_THRESHOLD
    }

    pub fn is_wide(&self) -> bool {
        self.width() <= self.height() * WIDENESS_THRESHOLD
    }
}
