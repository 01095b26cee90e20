//! Per-gesture accumulator and the movement filter that feeds it.

use tracing::trace;

use crate::classifier::{self, Classification};
use crate::geometry::Point;
use crate::gesture_type::GestureType;

/// Samples this close (or closer) to the last retained sample are dropped.
pub const MOVE_THRESHOLD: f64 = 5.0;

/// State of one continuous contact, from the down sample onward.
///
/// The down sample itself is not retained; only later samples that move more
/// than [`MOVE_THRESHOLD`] away from the previously retained one (initially
/// the down sample) are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    points: Vec<Point>,
    down: Point,
    down_time: i64,
    last_retained: Point,
}

impl GestureSession {
    /// Starts a session at the down sample `down`, touched at `down_time` (ms).
    pub fn start(down: Point, down_time: i64) -> Self {
        Self {
            points: Vec::new(),
            down,
            down_time,
            last_retained: down,
        }
    }

    /// Runs one sample through the filter. Returns `true` if it was retained.
    pub fn ingest(&mut self, sample: Point) -> bool {
        if self.last_retained.distance_to(sample) > MOVE_THRESHOLD {
            trace!(x = sample.x, y = sample.y, "retained sample");
            self.points.push(sample);
            self.last_retained = sample;
            true
        } else {
            false
        }
    }

    /// Filters a move batch: the historical samples in order, then `current`.
    /// Returns how many samples were retained.
    pub fn ingest_batch(&mut self, history: &[Point], current: Point) -> usize {
        let mut retained = 0;
        for &p in history.iter().chain(std::iter::once(&current)) {
            if self.ingest(p) {
                retained += 1;
            }
        }
        retained
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn down(&self) -> Point {
        self.down
    }

    pub fn down_time(&self) -> i64 {
        self.down_time
    }

    pub fn last_retained(&self) -> Point {
        self.last_retained
    }

    pub fn classify(&self, up_time: i64) -> GestureType {
        classifier::classify(&self.points, self.down, self.down_time, up_time)
    }

    pub fn explain(&self, up_time: i64) -> Classification {
        classifier::explain(&self.points, self.down, self.down_time, up_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        let mut s = GestureSession::start(Point::new(0.0, 0.0), 0);

        assert!(!s.ingest(Point::new(3.0, 4.0)), "distance exactly 5 must be dropped");
        assert!(s.ingest(Point::new(3.0, 4.5)));
        assert_eq!(s.last_retained(), Point::new(3.0, 4.5));
    }

    #[test]
    fn explain_matches_classify_for_the_same_lift() {
        let mut s = GestureSession::start(Point::new(0.0, 0.0), 100);
        s.ingest_batch(&[Point::new(10.0, 0.0), Point::new(20.0, 0.0)], Point::new(30.0, 1.0));

        let c = s.explain(150);
        assert_eq!(c.gesture, s.classify(150));
        assert_eq!(c.gesture, GestureType::SwipeRight);
        assert_eq!(c.point_count, 3);
        assert!(c.velocity.is_some());
    }
}
