use std::fmt;

use serde::{Deserialize, Serialize};

/// Every gesture class the parser can report.
///
/// `DoubleClick` is part of the vocabulary but is never produced by the
/// classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GestureType {
    SwipeUp,
    SwipeDown,
    SwipeLeft,
    SwipeRight,

    FlickUp,
    FlickDown,
    FlickLeft,
    FlickRight,

    SpiralClockwise,
    SpiralCounterclockwise,

    RubOut,

    Click,
    DoubleClick,

    Unknown,
}

impl GestureType {
    pub const ALL: [GestureType; 14] = [
        GestureType::SwipeUp,
        GestureType::SwipeDown,
        GestureType::SwipeLeft,
        GestureType::SwipeRight,
        GestureType::FlickUp,
        GestureType::FlickDown,
        GestureType::FlickLeft,
        GestureType::FlickRight,
        GestureType::SpiralClockwise,
        GestureType::SpiralCounterclockwise,
        GestureType::RubOut,
        GestureType::Click,
        GestureType::DoubleClick,
        GestureType::Unknown,
    ];

    /// Human-readable label, e.g. "Swipe Up".
    pub fn label(self) -> &'static str {
        match self {
            GestureType::SwipeUp => "Swipe Up",
            GestureType::SwipeDown => "Swipe Down",
            GestureType::SwipeLeft => "Swipe Left",
            GestureType::SwipeRight => "Swipe Right",
            GestureType::FlickUp => "Flick Up",
            GestureType::FlickDown => "Flick Down",
            GestureType::FlickLeft => "Flick Left",
            GestureType::FlickRight => "Flick Right",
            GestureType::SpiralClockwise => "Spiral Clockwise",
            GestureType::SpiralCounterclockwise => "Spiral Counterclockwise",
            GestureType::RubOut => "Rub Out",
            GestureType::Click => "Click",
            GestureType::DoubleClick => "Double-Click",
            GestureType::Unknown => "Unknown",
        }
    }

    /// Constant name as used in serialized output, e.g. `SWIPE_UP`.
    pub fn name(self) -> &'static str {
        match self {
            GestureType::SwipeUp => "SWIPE_UP",
            GestureType::SwipeDown => "SWIPE_DOWN",
            GestureType::SwipeLeft => "SWIPE_LEFT",
            GestureType::SwipeRight => "SWIPE_RIGHT",
            GestureType::FlickUp => "FLICK_UP",
            GestureType::FlickDown => "FLICK_DOWN",
            GestureType::FlickLeft => "FLICK_LEFT",
            GestureType::FlickRight => "FLICK_RIGHT",
            GestureType::SpiralClockwise => "SPIRAL_CLOCKWISE",
            GestureType::SpiralCounterclockwise => "SPIRAL_COUNTERCLOCKWISE",
            GestureType::RubOut => "RUB_OUT",
            GestureType::Click => "CLICK",
            GestureType::DoubleClick => "DOUBLE_CLICK",
            GestureType::Unknown => "UNKNOWN",
        }
    }

    /// False only for classes the classifier never emits.
    pub fn is_produced(self) -> bool {
        !matches!(self, GestureType::DoubleClick)
    }
}

impl fmt::Display for GestureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_names_match_name() {
        for g in GestureType::ALL {
            let json = serde_json::to_string(&g).unwrap();
            assert_eq!(json, format!("\"{}\"", g.name()));
        }
    }

    #[test]
    fn only_double_click_is_reserved() {
        let reserved: Vec<_> = GestureType::ALL
            .into_iter()
            .filter(|g| !g.is_produced())
            .collect();
        assert_eq!(reserved, vec![GestureType::DoubleClick]);
    }
}
