//! Single-touch gesture recognition.
//!
//! Raw samples are thinned by a [`GestureSession`], then classified from the
//! shape of their bounding box, the net turning angle of the path, the number
//! of direction reversals and the stroke velocity. [`GestureParser`] wires
//! this to a stream of [`TouchEvent`]s and reports to a [`GestureListener`].

pub mod analysis;
pub mod bounding_box;
pub mod classifier;
pub mod geometry;
pub mod gesture_type;
pub mod parser;
pub mod session;
pub mod trace;

pub use analysis::{TurningAnalysis, analyze};
pub use bounding_box::BoundingBox;
pub use classifier::{Classification, classify, explain, velocity};
pub use geometry::Point;
pub use gesture_type::GestureType;
pub use parser::{GestureListener, GestureParser, TouchEvent};
pub use session::{GestureSession, MOVE_THRESHOLD};
pub use trace::{Trace, TraceError, TraceFormat, load_trace};
