use anyhow::Result;
use gesture_parser_core::classifier::{Classification, explain};
use gesture_parser_core::geometry::{Point, radians_to_degrees};

use crate::cli::color::Colors;
use crate::cli::export::ClassificationExport;
use crate::ui::Style;
use crate::utils::formatting::{fmt_f64, fmt_point, print_kv_block_colored_keys};

#[derive(Debug, Clone, Copy)]
pub struct ClassifyOptions {
    pub down: Option<Point>,
    pub down_time: i64,
    pub up_time: i64,
    pub explain: bool,
    pub json: bool,
}

pub fn run(points: &[Point], opts: ClassifyOptions, style: Style) -> Result<()> {
    let down = opts.down.or_else(|| points.first().copied()).unwrap_or(Point::new(0.0, 0.0));
    let c = explain(points, down, opts.down_time, opts.up_time);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&ClassificationExport::from(&c))?);
        return Ok(());
    }

    let colors = Colors::new(&style);
    println!("{}", colors.gesture(c.gesture));

    if opts.explain {
        println!();
        print_explain(&c, down, opts.up_time.saturating_sub(opts.down_time), &colors);
    }

    Ok(())
}

/// Aligned block of every intermediate value behind `c`.
pub fn print_explain(c: &Classification, down: Point, duration_ms: i64, colors: &Colors) {
    let mut pairs: Vec<(&str, String)> = vec![
        ("Gesture", format!("{} ({})", c.gesture.label(), c.gesture.name())),
        ("Points", c.point_count.to_string()),
        ("Down", fmt_point(down)),
        ("Duration", format!("{duration_ms} ms")),
    ];

    match &c.bounding_box {
        Some(b) => {
            pairs.push((
                "Box",
                format!(
                    "{} .. {} ({} x {})",
                    fmt_point(b.upper_left()),
                    fmt_point(b.lower_right()),
                    fmt_f64(b.width(), 2),
                    fmt_f64(b.height(), 2)
                ),
            ));
            pairs.push((
                "Shape",
                format!(
                    "narrow={} short={} wide={}",
                    b.is_narrow(),
                    b.is_short(),
                    b.is_wide()
                ),
            ));
        }
        None => pairs.push(("Box", colors.dim("- (too few points)"))),
    }

    if let Some(a) = &c.analysis {
        pairs.push((
            "Turning",
            format!(
                "{} rad ({} deg), {}",
                fmt_f64(a.cumulative_angle, 4),
                fmt_f64(radians_to_degrees(a.cumulative_angle), 1),
                if a.clockwise { "clockwise" } else { "counterclockwise" }
            ),
        ));
        pairs.push(("Reversals", a.reversals.to_string()));
        pairs.push(("Vectors", a.vector_count.to_string()));
        pairs.push(("Last point", fmt_point(a.last_point)));
    }

    pairs.push((
        "Velocity",
        c.velocity
            .map(|v| format!("{} units/ms", fmt_f64(v, 4)))
            .unwrap_or_else(|| colors.dim("- (not needed)")),
    ));

    print_kv_block_colored_keys(&pairs, |k| colors.key(k));
}
