//! Event-driven front end: turns a stream of touch events into
//! progress and gesture notifications.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::geometry::Point;
use crate::gesture_type::GestureType;
use crate::session::GestureSession;

/// One input event from the touch source. Times are milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TouchEvent {
    /// First contact; begins a new gesture.
    Start { x: f64, y: f64, time: i64 },

    /// A batch of historical samples (oldest first) followed by the current one.
    Move {
        #[serde(default)]
        history: Vec<Point>,
        current: Point,
    },

    /// Contact lifted; ends the gesture.
    End { x: f64, y: f64, time: i64 },

    Cancel,

    /// Anything else the source reports (hover, outside, ...).
    Other { action: String },
}

impl TouchEvent {
    pub fn name(&self) -> &str {
        match self {
            TouchEvent::Start { .. } => "start",
            TouchEvent::Move { .. } => "move",
            TouchEvent::End { .. } => "end",
            TouchEvent::Cancel => "cancel",
            TouchEvent::Other { action } => action.as_str(),
        }
    }
}

/// Receiver of parser output.
pub trait GestureListener {
    /// Points retained so far; sent after every move batch.
    fn points(&mut self, points: &[Point]);

    /// Final verdict for a gesture that retained at least one point.
    fn gesture(&mut self, gesture: GestureType, start: Point, end: Point, points: &[Point]);
}

/// Drives one [`GestureSession`] at a time from [`TouchEvent`]s.
///
/// Single pointer only: concurrent contacts each need their own parser.
#[derive(Debug, Default)]
pub struct GestureParser {
    session: Option<GestureSession>,
}

impl GestureParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session in progress. After a cancel this still holds the canceled
    /// gesture's points until the next start replaces it.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn handle_event(&mut self, event: &TouchEvent, listener: &mut dyn GestureListener) {
        match event {
            TouchEvent::Start { x, y, time } => {
                debug!(x, y, time, "gesture started");
                self.session = Some(GestureSession::start(Point::new(*x, *y), *time));
            }

            TouchEvent::Move { history, current } => {
                // Moves without a preceding start are dropped.
                if let Some(session) = self.session.as_mut() {
                    session.ingest_batch(history, *current);
                    listener.points(session.points());
                }
            }

            TouchEvent::End { x, y, time } => {
                if let Some(session) = self.session.take() {
                    let gesture = session.classify(*time);
                    debug!(
                        gesture = gesture.name(),
                        points = session.points().len(),
                        "gesture ended"
                    );

                    if !session.points().is_empty() {
                        listener.gesture(gesture, session.down(), Point::new(*x, *y), session.points());
                    }
                }
            }

            TouchEvent::Cancel | TouchEvent::Other { .. } => {
                info!(event = event.name(), "ignoring touch event");
            }
        }
    }

    pub fn handle_events<'a, I>(&mut self, events: I, listener: &mut dyn GestureListener)
    where
        I: IntoIterator<Item = &'a TouchEvent>,
    {
        for event in events {
            self.handle_event(event, listener);
        }
    }
}
