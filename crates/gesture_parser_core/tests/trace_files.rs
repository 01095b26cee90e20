mod common;

use std::fs;
use std::path::{Path, PathBuf};

use crate::common::{RecordingListener, pts};
use gesture_parser_core::geometry::Point;
use gesture_parser_core::gesture_type::GestureType;
use gesture_parser_core::parser::{GestureParser, TouchEvent};
use gesture_parser_core::trace::{TraceError, TraceFormat, load_trace, read_csv, read_json};

const SWIPE_CSV: &str = "\
kind,x,y,time
start,0,0,1000
history,10,0,
history,20,0,
move,30,1,
end,30,1,1050
cancel,,,
hover_enter,,,
";

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("gesture_parser_{}_{name}", std::process::id()));
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn csv_history_rows_join_the_next_move() {
    let trace = read_csv(SWIPE_CSV.as_bytes()).unwrap();

    assert_eq!(
        trace.events,
        vec![
            TouchEvent::Start {
                x: 0.0,
                y: 0.0,
                time: 1000
            },
            TouchEvent::Move {
                history: pts(&[(10.0, 0.0), (20.0, 0.0)]),
                current: Point::new(30.0, 1.0),
            },
            TouchEvent::End {
                x: 30.0,
                y: 1.0,
                time: 1050
            },
            TouchEvent::Cancel,
            TouchEvent::Other {
                action: "hover_enter".to_string()
            },
        ]
    );
}

#[test]
fn csv_rejects_incomplete_rows() {
    let err = read_csv("kind,x,y,time\nstart,0,0,\n".as_bytes()).unwrap_err();
    assert!(
        matches!(err, TraceError::MissingField { row: 2, field: "time", .. }),
        "unexpected error: {err}"
    );

    let err = read_csv("kind,x,y,time\nstart,0,0,0\nhistory,1,1,\n".as_bytes()).unwrap_err();
    assert!(
        matches!(err, TraceError::DanglingHistory { count: 1 }),
        "unexpected error: {err}"
    );
}

#[test]
fn csv_history_cannot_cross_into_the_next_gesture() {
    let csv = "\
kind,x,y,time
start,0,0,0
history,100,100,
end,0,0,10
start,200,0,20
move,210,0,
end,210,0,30
";

    let err = read_csv(csv.as_bytes()).unwrap_err();
    assert!(
        matches!(err, TraceError::InterruptedHistory { row: 4, count: 1, ref kind } if kind == "end"),
        "unexpected error: {err}"
    );

    let err = read_csv("kind,x,y,time\nhistory,1,1,\nstart,0,0,0\n".as_bytes()).unwrap_err();
    assert!(
        matches!(err, TraceError::InterruptedHistory { row: 3, .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn csv_rows_may_omit_unused_columns() {
    let trace = read_csv("kind,x,y,time\nstart,0,0,0\ncancel\nhover_exit\nmove,3,4\n".as_bytes()).unwrap();

    assert_eq!(
        trace.events,
        vec![
            TouchEvent::Start {
                x: 0.0,
                y: 0.0,
                time: 0
            },
            TouchEvent::Cancel,
            TouchEvent::Other {
                action: "hover_exit".to_string()
            },
            TouchEvent::Move {
                history: vec![],
                current: Point::new(3.0, 4.0),
            },
        ]
    );
}

#[test]
fn json_history_is_optional() {
    let json = r#"{"events": [
        {"kind": "start", "x": 0, "y": 0, "time": 0},
        {"kind": "move", "current": {"x": 0, "y": 10}},
        {"kind": "move", "history": [{"x": 0, "y": 20}], "current": {"x": 1, "y": 30}},
        {"kind": "end", "x": 1, "y": 30, "time": 1000},
        {"kind": "other", "action": "outside"}
    ]}"#;

    let trace = read_json(json.as_bytes()).unwrap();
    assert_eq!(trace.events.len(), 5);
    assert_eq!(
        trace.events[1],
        TouchEvent::Move {
            history: vec![],
            current: Point::new(0.0, 10.0),
        }
    );

    let mut parser = GestureParser::new();
    let mut listener = RecordingListener::default();
    parser.handle_events(&trace.events, &mut listener);

    assert_eq!(listener.gestures.len(), 1);
    assert_eq!(listener.gestures[0].gesture, GestureType::SwipeDown);
}

#[test]
fn format_comes_from_the_extension() {
    assert_eq!(TraceFormat::from_path(Path::new("a/b.JSON")).unwrap(), TraceFormat::Json);
    assert_eq!(TraceFormat::from_path(Path::new("trace.csv")).unwrap(), TraceFormat::Csv);
    assert!(matches!(
        TraceFormat::from_path(Path::new("trace.txt")),
        Err(TraceError::UnsupportedFormat(_))
    ));
}

#[test]
fn replaying_a_file_reports_the_swipe() {
    let path = temp_file("swipe.csv", SWIPE_CSV);
    let trace = load_trace(&path, None).unwrap();
    let _ = fs::remove_file(&path);

    let mut parser = GestureParser::new();
    let mut listener = RecordingListener::default();
    parser.handle_events(&trace.events, &mut listener);

    assert_eq!(listener.progress.len(), 1);
    assert_eq!(listener.gestures.len(), 1);
    assert_eq!(listener.gestures[0].gesture, GestureType::SwipeRight);
    assert_eq!(listener.gestures[0].start, Point::new(0.0, 0.0));
}

#[test]
fn forced_format_overrides_the_extension() {
    let path = temp_file("swipe.trace", SWIPE_CSV);
    let trace = load_trace(&path, Some(TraceFormat::Csv));
    let _ = fs::remove_file(&path);

    assert_eq!(trace.unwrap().events.len(), 5);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_trace("/definitely/not/here.json", None).unwrap_err();
    assert!(matches!(err, TraceError::Io(_)), "unexpected error: {err}");
}
