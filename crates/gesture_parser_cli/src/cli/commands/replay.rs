use std::path::Path;

use anyhow::{Context, Result};
use gesture_parser_core::classifier::Classification;
use gesture_parser_core::geometry::Point;
use gesture_parser_core::gesture_type::GestureType;
use gesture_parser_core::parser::{GestureListener, GestureParser, TouchEvent};
use gesture_parser_core::trace::{TraceFormat, load_trace};
use tracing::debug;

use crate::cli::args::TraceFormatArg;
use crate::cli::color::Colors;
use crate::cli::commands::classify::print_explain;
use crate::cli::export::{ClassificationExport, GestureEventExport};
use crate::ui::{Style, info, success, warning};
use crate::utils::formatting::fmt_point;

#[derive(Debug, Clone, Copy)]
pub struct ReplayOptions {
    pub format: Option<TraceFormatArg>,
    pub progress: bool,
    pub explain: bool,
    pub json: bool,
}

/// Explanation of the gesture an `end` event is about to close.
struct PendingExplain {
    classification: Classification,
    duration_ms: i64,
}

/// Prints progress as it happens and keeps every gesture for the summary.
struct ReplayListener {
    colors: Colors,
    show_progress: bool,
    print_gestures: bool,
    pending: Option<PendingExplain>,
    gestures: Vec<GestureEventExport>,
}

impl GestureListener for ReplayListener {
    fn points(&mut self, points: &[Point]) {
        if !self.show_progress {
            return;
        }
        let last = points
            .last()
            .map(|p| fmt_point(*p))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {}",
            self.colors
                .dim(format!("{} point(s) so far, last {}", points.len(), last))
        );
    }

    fn gesture(&mut self, gesture: GestureType, start: Point, end: Point, points: &[Point]) {
        let index = self.gestures.len() + 1;
        let pending = self.pending.take();

        if self.print_gestures {
            println!(
                "#{:<3} {}  {} -> {}  ({} points)",
                index,
                self.colors.gesture(gesture),
                fmt_point(start),
                fmt_point(end),
                points.len()
            );
            if let Some(p) = &pending {
                print_explain(&p.classification, start, p.duration_ms, &self.colors);
                println!();
            }
        }

        self.gestures.push(GestureEventExport {
            index,
            gesture,
            label: gesture.label(),
            start,
            end,
            point_count: points.len(),
            points: points.to_vec(),
            explain: pending.map(|p| ClassificationExport::from(&p.classification)),
        });
    }
}

/// Explains the current session if `event` is about to end it.
fn explain_before(parser: &GestureParser, event: &TouchEvent) -> Option<PendingExplain> {
    let TouchEvent::End { time, .. } = event else {
        return None;
    };
    let session = parser.session()?;

    Some(PendingExplain {
        classification: session.explain(*time),
        duration_ms: time.saturating_sub(session.down_time()),
    })
}

pub fn run(file: &Path, opts: ReplayOptions, style: Style) -> Result<()> {
    let format = opts.format.map(|f| match f {
        TraceFormatArg::Json => TraceFormat::Json,
        TraceFormatArg::Csv => TraceFormat::Csv,
    });

    let trace = load_trace(file, format)
        .with_context(|| format!("Failed to load trace {}", file.display()))?;
    debug!(events = trace.events.len(), file = %file.display(), "trace loaded");

    let mut listener = ReplayListener {
        colors: Colors::new(&style),
        show_progress: opts.progress && !opts.json,
        print_gestures: !opts.json,
        pending: None,
        gestures: Vec::new(),
    };

    if !opts.json {
        info(
            format!("Replaying {} event(s) from {}", trace.events.len(), file.display()),
            style,
        );
    }

    let mut parser = GestureParser::new();
    for event in &trace.events {
        if opts.explain {
            listener.pending = explain_before(&parser, event);
        }
        parser.handle_event(event, &mut listener);
    }

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&listener.gestures)?);
        return Ok(());
    }

    if listener.gestures.is_empty() {
        warning("No gesture recognized (no gesture retained any points).", style);
    } else {
        success(
            format!("{} gesture(s) recognized.", listener.gestures.len()),
            style,
        );
    }

    if let Some(session) = parser.session() {
        warning(
            format!(
                "Trace ended mid-gesture: {} retained point(s) were never classified.",
                session.points().len()
            ),
            style,
        );
    }

    Ok(())
}
