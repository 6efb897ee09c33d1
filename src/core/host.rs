//! Collaborators the terminal core talks to.
//!
//! The core never touches the DOM or the terminal widget directly; the web
//! shell provides implementations of these traits.

use std::future::Future;

use super::error::FetchError;

/// Output side of the terminal widget.
pub trait Terminal {
    /// Write raw text (including escape sequences) at the cursor.
    fn write(&self, text: &str);

    /// Clear the viewport, keeping the current line.
    fn clear(&self);

    /// Resize the character grid.
    fn resize(&self, cols: u16, rows: u16);
}

/// Browser-side effects commands may request.
pub trait Platform {
    /// Open `url` in a new browsing context.
    fn open_url(&self, url: &str);

    /// Reload the hosting page.
    fn reload(&self);

    /// Fetch an image through the CORS proxy.
    fn fetch_image(&self, url: &str) -> impl Future<Output = Result<FetchedImage, FetchError>>;

    /// Read text for a paste request. `None` when unavailable.
    fn read_clipboard(&self) -> impl Future<Output = Option<String>>;
}

/// Raw response body of an image request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FetchedImage {
    /// Whether the response declared an `image/*` content type.
    pub fn is_image(&self) -> bool {
        self.content_type
            .trim_start()
            .to_ascii_lowercase()
            .starts_with("image/")
    }
}
