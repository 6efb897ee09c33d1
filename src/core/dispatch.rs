//! Command dispatch.
//!
//! Turns a submitted line into a registry lookup, runs the handler, applies
//! its effects, and re-issues the prompt.

use super::commands::{CommandResult, Effect};
use super::history::HistoryRing;
use super::host::{Platform, Terminal};
use super::output;
use super::registry::{CommandContext, CommandRegistry};
use crate::models::OutputLine;

/// How a submission was resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Blank line; nothing happened.
    Empty,
    /// A registered command ran.
    Executed(String),
    /// No command with this name.
    Unknown(String),
}

/// Borrowed view of a session used for a single submission.
pub struct Dispatcher<'a, T: Terminal, P: Platform> {
    pub registry: &'a CommandRegistry,
    pub history: &'a mut HistoryRing,
    pub terminal: &'a T,
    pub platform: &'a P,
}

impl<T: Terminal, P: Platform> Dispatcher<'_, T, P> {
    /// Dispatch one submitted line.
    ///
    /// The input is trimmed and lower-cased; the first word names the
    /// command and the second, if any, is its only argument.
    pub async fn submit(&mut self, buffer: &str) -> DispatchOutcome {
        let line = buffer.trim().to_lowercase();
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return DispatchOutcome::Empty;
        };
        let arg = tokens.next();

        let Some(entry) = self.registry.get(name) else {
            output::write_line(self.terminal, &output::bad_command_message(), true);
            output::prompt(self.terminal);
            return DispatchOutcome::Unknown(name.to_string());
        };

        log::debug!("dispatching {name} {arg:?}");
        self.history.record(name);
        let result = {
            let ctx = CommandContext {
                registry: self.registry,
                history: &*self.history,
            };
            entry.invoke(&ctx, arg)
        };
        self.apply(result).await;
        self.history.reset_cursor();
        output::prompt(self.terminal);

        DispatchOutcome::Executed(name.to_string())
    }

    async fn apply(&self, result: CommandResult) {
        for effect in result.effects {
            match effect {
                Effect::Line(line) => self.write(&line),
                Effect::Clear => self.terminal.clear(),
                Effect::Open(url) => self.platform.open_url(&url),
                Effect::Image(url) => self.preview_image(&url).await,
            }
        }
    }

    async fn preview_image(&self, url: &str) {
        match self.platform.fetch_image(url).await {
            Ok(image) if image.is_image() => {
                output::write_line(self.terminal, &output::inline_image(&image.bytes), true);
            }
            Ok(image) => {
                log::warn!("{url} is not an image ({})", image.content_type);
                self.write(&OutputLine::warn(format!(
                    "image: unsupported content type '{}'",
                    image.content_type
                )));
            }
            Err(e) => {
                log::warn!("image fetch failed for {url}: {e}");
                self.write(&OutputLine::warn(format!("image: request failed: {}", e)));
            }
        }
    }

    fn write(&self, line: &OutputLine) {
        output::write_line(self.terminal, &output::render(line), true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::builtin_registry;
    use crate::core::error::FetchError;
    use crate::core::host::FetchedImage;
    use crate::core::testing::{MockPlatform, RecordingTerminal};
    use crate::models::Mark;

    struct Fixture {
        registry: CommandRegistry,
        history: HistoryRing,
        terminal: RecordingTerminal,
        platform: MockPlatform,
    }

    impl Fixture {
        fn new(platform: MockPlatform) -> Self {
            Self {
                registry: builtin_registry().unwrap(),
                history: HistoryRing::new(),
                terminal: RecordingTerminal::new(),
                platform,
            }
        }

        async fn submit(&mut self, line: &str) -> DispatchOutcome {
            Dispatcher {
                registry: &self.registry,
                history: &mut self.history,
                terminal: &self.terminal,
                platform: &self.platform,
            }
            .submit(line)
            .await
        }
    }

    #[tokio::test]
    async fn test_case_and_whitespace_normalized() {
        let mut upper = Fixture::new(MockPlatform::new());
        let mut lower = Fixture::new(MockPlatform::new());

        assert_eq!(
            upper.submit("  HELP  ").await,
            DispatchOutcome::Executed("help".to_string())
        );
        lower.submit("help").await;

        assert_eq!(upper.terminal.output(), lower.terminal.output());
        assert!(upper.history.contains("help"));
    }

    #[tokio::test]
    async fn test_blank_input_is_silent() {
        let mut fx = Fixture::new(MockPlatform::new());
        for line in ["", "   ", "\t \t"] {
            assert_eq!(fx.submit(line).await, DispatchOutcome::Empty);
        }
        assert_eq!(fx.terminal.writes(), 0);
        assert!(fx.history.is_empty());
        assert_eq!(fx.history.cursor(), None);
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let mut fx = Fixture::new(MockPlatform::new());
        assert_eq!(
            fx.submit("frobnicate").await,
            DispatchOutcome::Unknown("frobnicate".to_string())
        );
        assert_eq!(
            fx.terminal.output(),
            format!("\r\n{}\r\n$ ", output::bad_command_message())
        );
        assert!(fx.history.is_empty());
    }

    #[tokio::test]
    async fn test_history_recorded_and_cursor_reset() {
        let mut fx = Fixture::new(MockPlatform::new());
        fx.submit("source").await;
        fx.submit("help").await;
        fx.submit("source extra").await;

        assert_eq!(fx.history.names().collect::<Vec<_>>(), vec!["source", "help"]);
        assert_eq!(fx.history.cursor(), Some(2));
    }

    #[tokio::test]
    async fn test_source_then_prompt() {
        let mut fx = Fixture::new(MockPlatform::new());
        fx.submit("source").await;
        assert_eq!(
            fx.terminal.output(),
            format!("\r\n{}\r\n$ ", crate::config::SOURCE_URL)
        );
    }

    #[tokio::test]
    async fn test_to_opens_with_scheme() {
        let mut fx = Fixture::new(MockPlatform::new());
        fx.submit("to example.com").await;
        assert_eq!(fx.platform.opened(), vec!["https://example.com"]);
    }

    #[tokio::test]
    async fn test_to_without_argument_hints() {
        let mut fx = Fixture::new(MockPlatform::new());
        fx.submit("to").await;
        assert!(fx.platform.opened().is_empty());
        assert_eq!(fx.terminal.output(), "\r\ntips: to <url>\r\n$ ");
    }

    #[tokio::test]
    async fn test_clear_clears_viewport() {
        let mut fx = Fixture::new(MockPlatform::new());
        fx.submit("cls").await;
        assert_eq!(fx.terminal.clears(), 1);
        assert_eq!(fx.terminal.output(), "\r\n$ ");
    }

    #[tokio::test]
    async fn test_image_http_error_warns() {
        let mut fx = Fixture::new(MockPlatform::with_response(Err(FetchError::Http {
            status: 404,
            reason: "Not Found".to_string(),
        })));
        fx.submit("image http://x.com/a.png").await;

        let out = fx.terminal.output();
        assert_eq!(fx.platform.fetched(), vec!["http://x.com/a.png"]);
        assert!(out.contains("Not Found"));
        assert!(out.contains(&format!("\x1b[1;3;{}m", Mark::Warn.color_code())));
        assert!(!out.contains("\x1b]1337;"));
    }

    #[tokio::test]
    async fn test_image_wrong_content_type_warns() {
        let mut fx = Fixture::new(MockPlatform::with_response(Ok(FetchedImage {
            content_type: "text/html".to_string(),
            bytes: b"<html>".to_vec(),
        })));
        fx.submit("img http://x.com/a.png").await;

        let out = fx.terminal.output();
        assert!(out.contains("unsupported content type 'text/html'"));
        assert!(!out.contains("\x1b]1337;"));
    }

    #[tokio::test]
    async fn test_image_rendered_inline() {
        let bytes = vec![0x89, b'P', b'N', b'G'];
        let mut fx = Fixture::new(MockPlatform::with_response(Ok(FetchedImage {
            content_type: "image/png".to_string(),
            bytes: bytes.clone(),
        })));
        fx.submit("pic http://x.com/a.png").await;

        assert_eq!(
            fx.terminal.output(),
            format!("\r\n{}\r\n$ ", output::inline_image(&bytes))
        );
    }

    #[tokio::test]
    async fn test_image_invalid_link_skips_fetch() {
        let mut fx = Fixture::new(MockPlatform::new());
        fx.submit("image http://x.com/readme").await;
        assert!(fx.platform.fetched().is_empty());
        assert!(fx.terminal.output().contains("Invalid Image Link."));
    }
}
