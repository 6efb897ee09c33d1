//! Terminal-related data types for input events and output rendering.

/// Semantic category of a styled output fragment.
///
/// Each category maps to an ANSI foreground color, rendered bold italic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    /// Cyan
    Info,
    /// Red
    Error,
    /// Green
    #[allow(dead_code)]
    Ok,
    /// Yellow
    Warn,
    /// Black, reads as dimmed on the dark theme
    None,
}

impl Mark {
    /// ANSI SGR foreground color code.
    pub fn color_code(self) -> u8 {
        match self {
            Self::Info => 36,
            Self::Error => 31,
            Self::Ok => 32,
            Self::Warn => 33,
            Self::None => 30,
        }
    }
}

/// A single line of command output, optionally styled as a whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub mark: Option<Mark>,
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self {
            text: s.into(),
            mark: None,
        }
    }

    pub fn styled(s: impl Into<String>, mark: Mark) -> Self {
        Self {
            text: s.into(),
            mark: Some(mark),
        }
    }

    pub fn warn(s: impl Into<String>) -> Self {
        Self::styled(s, Mark::Warn)
    }
}

/// Key identity delivered by the terminal's key subscription.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    F11,
    Char(char),
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            "Backspace" => Self::Backspace,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "F11" => Self::F11,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// A key press and whether Ctrl was held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
}

#[cfg(test)]
impl KeyEvent {
    /// An unmodified key press.
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}

/// Everything the terminal widget reports, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Raw input chunk from the data subscription.
    Data(String),
    /// Key press from the key subscription.
    Key(KeyEvent),
    /// Viewport changed; the grid should be resized.
    Resize { cols: u16, rows: u16 },
}
