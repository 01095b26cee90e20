//! Recorded touch traces.
//!
//! A trace is a list of [`TouchEvent`]s stored either as JSON
//! (`{"events": [...]}`) or as CSV with the header `kind,x,y,time`. In CSV,
//! `history` rows are buffered and handed to the next `move` row as its batch;
//! any other row in between is an error. Unused columns may be left empty or
//! omitted.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Point;
use crate::parser::TouchEvent;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: '{kind}' event is missing '{field}'")]
    MissingField {
        row: usize,
        kind: String,
        field: &'static str,
    },

    #[error("{count} history row(s) at the end of the trace are not followed by a move")]
    DanglingHistory { count: usize },

    #[error("row {row}: '{kind}' event arrived while {count} history row(s) awaited a move")]
    InterruptedHistory {
        row: usize,
        kind: String,
        count: usize,
    },

    #[error("cannot tell trace format from '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    Json,
    Csv,
}

impl TraceFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, TraceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(TraceFormat::Json),
            Some("csv") => Ok(TraceFormat::Csv),
            _ => Err(TraceError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub events: Vec<TouchEvent>,
}

#[derive(Debug, Deserialize)]
struct TraceRow {
    kind: String,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    time: Option<i64>,
}

/// Loads a trace, taking the format from the extension unless `format` is given.
pub fn load_trace(path: impl AsRef<Path>, format: Option<TraceFormat>) -> Result<Trace, TraceError> {
    let path = path.as_ref();
    let format = match format {
        Some(f) => f,
        None => TraceFormat::from_path(path)?,
    };

    let reader = BufReader::new(File::open(path)?);
    match format {
        TraceFormat::Json => read_json(reader),
        TraceFormat::Csv => read_csv(reader),
    }
}

pub fn read_json<R: Read>(reader: R) -> Result<Trace, TraceError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn read_csv<R: Read>(reader: R) -> Result<Trace, TraceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut events = Vec::new();
    let mut history = Vec::new();

    for (idx, result) in rdr.deserialize::<TraceRow>().enumerate() {
        let row = result?;
        // header is line 1
        let line = idx + 2;
        let kind = row.kind.to_ascii_lowercase();

        if !history.is_empty() && !matches!(kind.as_str(), "history" | "move") {
            return Err(TraceError::InterruptedHistory {
                row: line,
                kind: row.kind.clone(),
                count: history.len(),
            });
        }

        match kind.as_str() {
            "start" | "end" => {
                let (x, y) = coords(&row, line)?;
                let time = row.time.ok_or_else(|| missing(&row, line, "time"))?;
                events.push(if kind == "start" {
                    TouchEvent::Start { x, y, time }
                } else {
                    TouchEvent::End { x, y, time }
                });
            }
            "history" => {
                let (x, y) = coords(&row, line)?;
                history.push(Point::new(x, y));
            }
            "move" => {
                let (x, y) = coords(&row, line)?;
                events.push(TouchEvent::Move {
                    history: std::mem::take(&mut history),
                    current: Point::new(x, y),
                });
            }
            "cancel" => events.push(TouchEvent::Cancel),
            "" => return Err(missing(&row, line, "kind")),
            _ => events.push(TouchEvent::Other {
                action: kind.clone(),
            }),
        }
    }

    if !history.is_empty() {
        return Err(TraceError::DanglingHistory {
            count: history.len(),
        });
    }

    Ok(Trace { events })
}

fn coords(row: &TraceRow, line: usize) -> Result<(f64, f64), TraceError> {
    let x = row.x.ok_or_else(|| missing(row, line, "x"))?;
    let y = row.y.ok_or_else(|| missing(row, line, "y"))?;
    Ok((x, y))
}

fn missing(row: &TraceRow, line: usize, field: &'static str) -> TraceError {
    TraceError::MissingField {
        row: line,
        kind: row.kind.clone(),
        field,
    }
}
