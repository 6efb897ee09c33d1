//! ANSI output formatting and the line/prompt writers.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::config::{IMAGE_WIDTH_HINT, PROMPT_UNIT};
use crate::models::{Mark, OutputLine};

use super::host::Terminal;

/// Wrap `text` (right-trimmed) in a bold italic color for `mark`.
pub fn mark(text: &str, mark: Mark) -> String {
    format!("\x1b[1;3;{}m{}\x1b[0m", mark.color_code(), text.trim_end())
}

/// Render an [`OutputLine`] to the text that goes on screen.
pub fn render(line: &OutputLine) -> String {
    match line.mark {
        Some(m) => mark(&line.text, m),
        None => line.text.clone(),
    }
}

/// Start a new line and write `text` (right-trimmed).
///
/// A `bare` line starts at column zero; otherwise it carries the prompt
/// glyph. No trailing newline is written; the next prompt supplies it.
pub fn write_line(term: &impl Terminal, text: &str, bare: bool) {
    if bare {
        term.write("\r\n");
    } else {
        term.write(&format!("\r\n{PROMPT_UNIT} "));
    }
    term.write(text.trim_end());
}

/// Write a fresh prompt.
pub fn prompt(term: &impl Terminal) {
    term.write(&format!("\r\n{PROMPT_UNIT} "));
}

/// Build the iTerm2 inline-image sequence for raw image bytes.
pub fn inline_image(bytes: &[u8]) -> String {
    format!(
        "\x1b]1337;File=inline=1;size={};width={}:{}\x1b\\",
        bytes.len(),
        IMAGE_WIDTH_HINT,
        STANDARD.encode(bytes)
    )
}

/// Fixed reply for input that names no registered command.
pub fn bad_command_message() -> String {
    format!(
        "the command is incorrect, you can use {} or {} to view commands.",
        mark("help", Mark::Info),
        mark("h", Mark::Info)
    )
}

/// Greeting written once when the session starts.
pub fn banner() -> String {
    format!(
        "{}  ~\r\n{}\r\n{}\r\ntype {} to get started.",
        crate::config::APP_NAME,
        mark("copy functionality is currently not supported.", Mark::None),
        mark(
            "some key actions are not processed, so it is not surprising that the default actions appear.",
            Mark::None
        ),
        mark("help", Mark::Info)
    )
}
