//! The decision procedure.
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. fewer than [`FEW_ENOUGH_POINTS_TO_BE_A_CLICK`] points: click
//! 2. at least [`ENOUGH_REVERSES_TO_BE_RUB_OUT`] dot-product reversals: rub-out
//! 3. net rotation of at least [`PORTION_OF_A_CIRCLE_TO_BE_CLOSED`] of a full
//!    turn: spiral, by winding sign
//! 4. narrow bounding box: swipe (slow) or flick (fast), along the box's long axis
//! 5. anything else: unknown

use std::f64::consts::TAU;

use serde::Serialize;
use tracing::debug;

use crate::analysis::{TurningAnalysis, analyze};
use crate::bounding_box::BoundingBox;
use crate::geometry::Point;
use crate::gesture_type::GestureType;

pub const FEW_ENOUGH_POINTS_TO_BE_A_CLICK: usize = 3;
pub const ENOUGH_REVERSES_TO_BE_RUB_OUT: usize = 6;
pub const PORTION_OF_A_CIRCLE_TO_BE_CLOSED: f64 = 0.75;

/// Velocity (distance units per millisecond) above which a stroke is a flick.
pub const FLICK_THRESHOLD: f64 = 3.0;

/// The verdict plus every intermediate value that led to it.
///
/// Fields are `None` when the rule chain stopped before computing them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub gesture: GestureType,
    pub point_count: usize,
    pub bounding_box: Option<BoundingBox>,
    pub analysis: Option<TurningAnalysis>,
    pub velocity: Option<f64>,
}

/// Classifies a retained point sequence.
///
/// `down` is the initial contact (not itself part of `points`); times are in
/// milliseconds. Total and pure: same inputs, same answer.
pub fn classify(points: &[Point], down: Point, down_time: i64, up_time: i64) -> GestureType {
    explain(points, down, down_time, up_time).gesture
}

/// Same as [`classify`], keeping the intermediate values.
pub fn explain(points: &[Point], down: Point, down_time: i64, up_time: i64) -> Classification {
    let mut out = Classification {
        gesture: GestureType::Unknown,
        point_count: points.len(),
        bounding_box: None,
        analysis: None,
        velocity: None,
    };

    if points.len() < FEW_ENOUGH_POINTS_TO_BE_A_CLICK {
        out.gesture = GestureType::Click;
        debug!(points = points.len(), "too few points, click");
        return out;
    }

    let (Some(bbox), Some(analysis)) = (BoundingBox::compute(points), analyze(points)) else {
        return out;
    };
    out.bounding_box = Some(bbox);
    out.analysis = Some(analysis);

    out.gesture = if analysis.reversals >= ENOUGH_REVERSES_TO_BE_RUB_OUT {
        GestureType::RubOut
    } else if analysis.cumulative_angle.abs() >= TAU * PORTION_OF_A_CIRCLE_TO_BE_CLOSED {
        if analysis.clockwise {
            GestureType::SpiralClockwise
        } else {
            GestureType::SpiralCounterclockwise
        }
    } else if bbox.is_narrow() {
        let v = velocity(points, down, down_time, up_time);
        out.velocity = Some(v);
        stroke_direction(&bbox, points[0], analysis.last_point, v <= FLICK_THRESHOLD)
    } else {
        GestureType::Unknown
    };

    debug!(
        gesture = out.gesture.name(),
        points = points.len(),
        reversals = analysis.reversals,
        angle = analysis.cumulative_angle,
        velocity = ?out.velocity,
        "classified gesture"
    );

    out
}

/// Average speed over the gesture in distance units per millisecond.
///
/// Absolute per-step deltas are summed separately on each axis, starting from
/// `down`, and only then combined into one magnitude. This is not arc length.
/// A zero-length duration yields an infinite (or NaN) velocity.
pub fn velocity(points: &[Point], down: Point, down_time: i64, up_time: i64) -> f64 {
    let mut traveled_x = 0.0;
    let mut traveled_y = 0.0;
    let mut last = down;

    for &p in points {
        traveled_x += (p.x - last.x).abs();
        traveled_y += (p.y - last.y).abs();
        last = p;
    }

    let distance = (traveled_x * traveled_x + traveled_y * traveled_y).sqrt();
    distance / up_time.saturating_sub(down_time) as f64
}

fn stroke_direction(bbox: &BoundingBox, first: Point, last: Point, slow: bool) -> GestureType {
    // Ties fall to LEFT / UP: comparisons are strict.
    match (bbox.is_short(), slow) {
        (true, true) if first.x < last.x => GestureType::SwipeRight,
        (true, true) => GestureType::SwipeLeft,
        (true, false) if first.x < last.x => GestureType::FlickRight,
        (true, false) => GestureType::FlickLeft,
        (false, true) if first.y < last.y => GestureType::SwipeDown,
        (false, true) => GestureType::SwipeUp,
        (false, false) if first.y < last.y => GestureType::FlickDown,
        (false, false) => GestureType::FlickUp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_sums_axes_independently() {
        let down = Point::new(0.0, 0.0);
        let points = [Point::new(3.0, 4.0), Point::new(0.0, 8.0)];

        // |dx| = 3 + 3, |dy| = 4 + 4, magnitude of (6, 8) is 10, over 5 ms.
        assert_eq!(velocity(&points, down, 100, 105), 2.0);
    }

    #[test]
    fn zero_duration_is_not_finite() {
        let down = Point::new(0.0, 0.0);
        let points = [Point::new(10.0, 0.0)];

        assert!(velocity(&points, down, 7, 7).is_infinite());
        assert!(velocity(&[], down, 7, 7).is_nan());
    }
}
