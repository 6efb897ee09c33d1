//! Utility modules for browser and link handling.
//!
//! Provides:
//! - [`normalize_link`], [`is_image_url`] - Link validation for `to` and `image`
//! - [`fetch_image`] - Proxied image fetch with timeout
//! - [`dom`] - Window access, viewport grid and navigation helpers
//! - [`logger`] - `log` backend writing to the browser console

pub mod dom;
mod fetch;
pub mod logger;
mod url;

pub use fetch::fetch_image;
pub use url::{is_image_url, normalize_link};
