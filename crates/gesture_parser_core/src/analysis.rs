//! Turning-angle analysis of a retained point sequence.
//!
//! Walks consecutive displacement vectors, summing the signed angle between
//! each pair and counting how often the sign of their dot product flips.

use serde::Serialize;
use tracing::trace;

use crate::geometry::{Point, angle_between, cross_product, dot_product};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TurningAnalysis {
    /// Net signed rotation in radians. NaN if the very first angle was NaN.
    pub cumulative_angle: f64,
    /// Strict sign flips of the dot product between consecutive vector pairs.
    pub reversals: usize,
    pub clockwise: bool,
    pub vector_count: usize,
    pub last_point: Point,
}

/// Analyzes `points`. `None` when fewer than three points are given.
///
/// The first angle is taken as-is, even when it is NaN; that poisons the sum
/// for the rest of the walk. Later NaN angles are skipped.
pub fn analyze(points: &[Point]) -> Option<TurningAnalysis> {
    let [first, second, third, rest @ ..] = points else {
        return None;
    };

    let mut vector0 = *second - *first;
    let mut vector1 = *third - *second;
    let mut last_point = *third;

    let dot = dot_product(vector0, vector1);
    let cross = cross_product(vector0, vector1);

    let mut cumulative_angle = angle_between(dot, cross, vector0, vector1);
    let mut reversals = 0;
    let mut vector_count = 2;
    let mut dot_was_positive = dot > 0.0;

    for &p in rest {
        vector0 = vector1;
        vector1 = p - last_point;
        last_point = p;
        vector_count += 1;

        let dot = dot_product(vector0, vector1);
        let cross = cross_product(vector0, vector1);
        let angle = angle_between(dot, cross, vector0, vector1);

        if angle.is_nan() {
            trace!(x = p.x, y = p.y, "skipping undefined turning angle");
        } else {
            cumulative_angle += angle;
        }

        if dot > 0.0 {
            if !dot_was_positive {
                reversals += 1;
                dot_was_positive = true;
            }
        } else if dot < 0.0 && dot_was_positive {
            reversals += 1;
            dot_was_positive = false;
        }
    }

    Some(TurningAnalysis {
        cumulative_angle,
        reversals,
        clockwise: cumulative_angle > 0.0,
        vector_count,
        last_point,
    })
}
