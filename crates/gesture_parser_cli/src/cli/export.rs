use gesture_parser_core::analysis::TurningAnalysis;
use gesture_parser_core::bounding_box::BoundingBox;
use gesture_parser_core::classifier::Classification;
use gesture_parser_core::geometry::{Point, radians_to_degrees};
use gesture_parser_core::gesture_type::GestureType;
use serde::Serialize;

// Non-finite numbers (zero-duration velocity, poisoned angle sums) serialize
// as null.

#[derive(Debug, Serialize)]
pub struct ClassificationExport {
    pub gesture: GestureType,
    pub label: &'static str,
    pub point_count: usize,
    pub bounding_box: Option<BoxExport>,
    pub analysis: Option<AnalysisExport>,
    pub velocity: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct BoxExport {
    pub upper_left: Point,
    pub lower_right: Point,
    pub width: f64,
    pub height: f64,
    pub narrow: bool,
    pub short: bool,
    pub wide: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalysisExport {
    pub cumulative_angle_rad: f64,
    pub cumulative_angle_deg: f64,
    pub reversals: usize,
    pub clockwise: bool,
    pub vector_count: usize,
    pub last_point: Point,
}

#[derive(Debug, Serialize)]
pub struct GestureEventExport {
    pub index: usize,
    pub gesture: GestureType,
    pub label: &'static str,
    pub start: Point,
    pub end: Point,
    pub point_count: usize,
    pub points: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain: Option<ClassificationExport>,
}

impl From<&Classification> for ClassificationExport {
    fn from(c: &Classification) -> Self {
        Self {
            gesture: c.gesture,
            label: c.gesture.label(),
            point_count: c.point_count,
            bounding_box: c.bounding_box.as_ref().map(BoxExport::from),
            analysis: c.analysis.as_ref().map(AnalysisExport::from),
            velocity: c.velocity,
        }
    }
}

impl From<&BoundingBox> for BoxExport {
    fn from(b: &BoundingBox) -> Self {
        Self {
            upper_left: b.upper_left(),
            lower_right: b.lower_right(),
            width: b.width(),
            height: b.height(),
            narrow: b.is_narrow(),
            short: b.is_short(),
            wide: b.is_wide(),
        }
    }
}

impl From<&TurningAnalysis> for AnalysisExport {
    fn from(a: &TurningAnalysis) -> Self {
        Self {
            cumulative_angle_rad: a.cumulative_angle,
            cumulative_angle_deg: radians_to_degrees(a.cumulative_angle),
            reversals: a.reversals,
            clockwise: a.clockwise,
            vector_count: a.vector_count,
            last_point: a.last_point,
        }
    }
}
