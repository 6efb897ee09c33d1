mod terminal;
mod xterm;

pub use terminal::TerminalView;
