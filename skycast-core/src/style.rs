//! ANSI styling tokens for the weather line.
//!
//! Styles are explicit values handed to pure helpers; nothing tracks a
//! "current terminal color". Every painted segment closes with [`RESET`] so
//! styling never bleeds into later output.

/// Clears all active styling.
pub const RESET: &str = "\x1b[0m";

/// Swaps foreground and background for the wrapped segment.
pub const REVERSE: &str = "\x1b[7m";

/// Foreground colors used by the condition table, from the 256-color
/// palette. `Default` paints nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Cyan,
    Blue,
    White,
    PaleBlue,
    Ash,
    LightBlue,
    Brown,
    Yellow,
    Default,
}

impl Color {
    /// The escape sequence that starts this color; empty for `Default`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Color::Red => "\x1b[38;5;196m",
            Color::Cyan => "\x1b[38;5;51m",
            Color::Blue => "\x1b[38;5;33m",
            Color::White => "\x1b[38;5;255m",
            Color::PaleBlue => "\x1b[38;5;153m",
            Color::Ash => "\x1b[38;5;245m",
            Color::LightBlue => "\x1b[38;5;117m",
            Color::Brown => "\x1b[38;5;130m",
            Color::Yellow => "\x1b[38;5;226m",
            Color::Default => "",
        }
    }
}

/// Wrap `text` in `color`, closing with [`RESET`]. `Default` leaves the
/// text unstyled.
pub fn paint(text: &str, color: Color) -> String {
    match color.prefix() {
        "" => text.to_string(),
        prefix => format!("{prefix}{text}{RESET}"),
    }
}

/// Wrap `text` in reverse video, closing with [`RESET`].
pub fn reverse(text: &str) -> String {
    format!("{REVERSE}{text}{RESET}")
}
