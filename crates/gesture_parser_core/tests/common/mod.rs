#![allow(dead_code)]

use gesture_parser_core::geometry::Point;
use gesture_parser_core::gesture_type::GestureType;
use gesture_parser_core::parser::GestureListener;

pub fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedGesture {
    pub gesture: GestureType,
    pub start: Point,
    pub end: Point,
    pub points: Vec<Point>,
}

/// Listener that keeps every notification for later assertions.
#[derive(Debug, Default)]
pub struct RecordingListener {
    pub progress: Vec<Vec<Point>>,
    pub gestures: Vec<RecordedGesture>,
}

impl GestureListener for RecordingListener {
    fn points(&mut self, points: &[Point]) {
        self.progress.push(points.to_vec());
    }

    fn gesture(&mut self, gesture: GestureType, start: Point, end: Point, points: &[Point]) {
        self.gestures.push(RecordedGesture {
            gesture,
            start,
            end,
            points: points.to_vec(),
        });
    }
}
