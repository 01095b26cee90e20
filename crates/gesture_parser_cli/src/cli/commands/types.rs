use anyhow::Result;
use gesture_parser_core::gesture_type::GestureType;

use crate::cli::color::Colors;
use crate::ui::Style;

pub fn run(style: Style) -> Result<()> {
    let colors = Colors::new(&style);

    for g in GestureType::ALL {
        let note = if g.is_produced() {
            String::new()
        } else {
            format!("  {}", colors.dim("(reserved, never produced)"))
        };
        println!("{:<24}\t{}{}", g.name(), colors.gesture(g), note);
    }

    Ok(())
}
