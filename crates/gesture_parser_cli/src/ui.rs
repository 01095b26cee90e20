use owo_colors::OwoColorize;

#[derive(Clone, Copy, Debug)]
pub enum Level {
    Info,
    Success,
    Warning,
}

#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub emoji: bool,
    pub color: bool,
}

impl Default for Style {
    fn default() -> Self {
        // Colors only when stdout is a TTY; emojis always on by default.
        let color = atty::is(atty::Stream::Stdout);
        Self { emoji: true, color }
    }
}

impl Style {
    /// Default style, with colors forced off when `no_color` is set.
    pub fn detect(no_color: bool) -> Self {
        let mut style = Self::default();
        if no_color {
            style.color = false;
        }
        style
    }
}

pub fn info(msg: impl AsRef<str>, style: Style) {
    print_line(Level::Info, msg.as_ref(), style);
}

pub fn success(msg: impl AsRef<str>, style: Style) {
    print_line(Level::Success, msg.as_ref(), style);
}

pub fn warning(msg: impl AsRef<str>, style: Style) {
    print_line(Level::Warning, msg.as_ref(), style);
}

pub fn print_line(level: Level, msg: &str, style: Style) {
    let emoji = match level {
        Level::Info => "ℹ️ ",
        Level::Success => "✅ ",
        Level::Warning => "⚠️ ",
    };

    let prefix = if style.emoji { emoji } else { "" };
    let line = format!("{}{}", prefix, msg);

    if style.color {
        match level {
            Level::Info => println!("{}", line),
            Level::Success => println!("{}", line.green()),
            Level::Warning => println!("{}", line.yellow()),
        }
    } else {
        println!("{}", line);
    }
}
