//! Terminal text helpers used for user facing messages.

/// ANSI color code for important messages (yellow).
pub const MESSAGE_COLOR: u8 = 33;

/// ANSI color code for errors (red).
pub const ERROR_COLOR: u8 = 31;

/// Wrap `text` in an ANSI color escape and reset the color afterwards.
pub fn color_text(text: &str, color_code: u8) -> String {
    format!("\x1b[0;{color_code}m{text}\n\x1b[0;0m")
}

/// Yellow text, for important messages.
pub fn message_formatter(message: &str) -> String {
    color_text(message, MESSAGE_COLOR)
}

/// Red text, for errors.
pub fn error_formatter(message: &str) -> String {
    color_text(message, ERROR_COLOR)
}
