// src/cli/validate.rs
use anyhow::{Result, bail};
use gesture_parser_core::geometry::Point;

pub const TIP_NEGATIVE_COORDS: &str =
    "Note: points are written X,Y with no spaces, e.g.:\n  classify 0,0 10,0 20,-1 --down=-5,0";

/// Parses `X,Y` into a point (clap value parser).
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;

    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid X coordinate in '{s}'"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid Y coordinate in '{s}'"))?;

    if !x.is_finite() || !y.is_finite() {
        return Err(format!("coordinates must be finite: '{s}'"));
    }

    Ok(Point::new(x, y))
}

pub fn validate_classify(points: &[Point], down_time: i64, up_time: i64) -> Result<()> {
    if points.is_empty() {
        bail!("At least one point is required.\n\n{TIP_NEGATIVE_COORDS}");
    }
    if up_time < down_time {
        bail!("--up-time ({up_time}) must not be earlier than --down-time ({down_time})");
    }
    Ok(())
}
