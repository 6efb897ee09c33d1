//! Recording fakes for the terminal and platform collaborators.

use std::cell::{Cell, RefCell};

use super::error::FetchError;
use super::host::{FetchedImage, Platform, Terminal};

#[derive(Default)]
pub struct RecordingTerminal {
    output: RefCell<String>,
    writes: Cell<usize>,
    clears: Cell<usize>,
    sizes: RefCell<Vec<(u16, u16)>>,
}

impl RecordingTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> String {
        self.output.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn clears(&self) -> usize {
        self.clears.get()
    }

    pub fn sizes(&self) -> Vec<(u16, u16)> {
        self.sizes.borrow().clone()
    }

    pub fn reset(&self) {
        self.output.borrow_mut().clear();
        self.writes.set(0);
    }
}

impl Terminal for RecordingTerminal {
    fn write(&self, text: &str) {
        self.output.borrow_mut().push_str(text);
        self.writes.set(self.writes.get() + 1);
    }

    fn clear(&self) {
        self.clears.set(self.clears.get() + 1);
    }

    fn resize(&self, cols: u16, rows: u16) {
        self.sizes.borrow_mut().push((cols, rows));
    }
}

#[derive(Default)]
pub struct MockPlatform {
    opened: RefCell<Vec<String>>,
    fetched: RefCell<Vec<String>>,
    response: RefCell<Option<Result<FetchedImage, FetchError>>>,
    clipboard: RefCell<Option<String>>,
    reloads: Cell<usize>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(response: Result<FetchedImage, FetchError>) -> Self {
        let platform = Self::default();
        *platform.response.borrow_mut() = Some(response);
        platform
    }

    pub fn with_clipboard(text: &str) -> Self {
        let platform = Self::default();
        *platform.clipboard.borrow_mut() = Some(text.to_string());
        platform
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }

    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }
}

impl Platform for MockPlatform {
    fn open_url(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    async fn fetch_image(&self, url: &str) -> Result<FetchedImage, FetchError> {
        self.fetched.borrow_mut().push(url.to_string());
        self.response
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(FetchError::Network("no response queued".to_string())))
    }

    async fn read_clipboard(&self) -> Option<String> {
        self.clipboard.borrow().clone()
    }
}
