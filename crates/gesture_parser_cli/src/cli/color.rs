use gesture_parser_core::gesture_type::GestureType;
use owo_colors::{AnsiColors, OwoColorize};

use crate::ui::Style;

/// Gesture-family color policy shared across commands.
///
/// All functions return `String`; colors are applied only if enabled.
pub struct Colors {
    pub enabled: bool,
}

impl Colors {
    pub fn new(style: &Style) -> Self {
        Self {
            enabled: style.color,
        }
    }

    fn paint(&self, s: &str, color: AnsiColors) -> String {
        if self.enabled {
            s.color(color).to_string()
        } else {
            s.to_string()
        }
    }

    /// Keys of explain blocks.
    pub fn key(&self, s: impl AsRef<str>) -> String {
        self.paint(s.as_ref(), AnsiColors::Cyan)
    }

    /// Placeholders and side notes.
    pub fn dim(&self, s: impl AsRef<str>) -> String {
        self.paint(s.as_ref(), AnsiColors::BrightBlack)
    }

    /// The gesture's label, colored by family.
    pub fn gesture(&self, g: GestureType) -> String {
        self.paint(g.label(), family_color(g))
    }
}

fn family_color(g: GestureType) -> AnsiColors {
    match g {
        GestureType::SwipeUp
        | GestureType::SwipeDown
        | GestureType::SwipeLeft
        | GestureType::SwipeRight => AnsiColors::Green,
        GestureType::FlickUp
        | GestureType::FlickDown
        | GestureType::FlickLeft
        | GestureType::FlickRight => AnsiColors::Cyan,
        GestureType::SpiralClockwise | GestureType::SpiralCounterclockwise => AnsiColors::Magenta,
        GestureType::RubOut => AnsiColors::Red,
        GestureType::Click | GestureType::DoubleClick => AnsiColors::Yellow,
        GestureType::Unknown => AnsiColors::BrightBlack,
    }
}
