//! Network fetching with timeout support.
//!
//! Image previews are fetched through a CORS proxy and raced against
//! `FETCH_TIMEOUT_MS`, so a stalled request cannot hold the terminal.

use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::config::{CORS_PROXY, FETCH_TIMEOUT_MS};
use crate::core::FetchedImage;
use crate::core::error::FetchError;

/// Proxy URL for `url`, which is URI-encoded into the query.
pub fn proxied_url(url: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(url).into();
    format!("{}{}", CORS_PROXY, encoded)
}

/// Fetch the raw bytes and declared content type of `url`.
///
/// Returns `FetchError::Http` for non-2xx responses and
/// `FetchError::Timeout` when the proxy does not answer in time.
pub async fn fetch_image(url: &str) -> Result<FetchedImage, FetchError> {
    let request = Box::pin(fetch_proxied(proxied_url(url)));
    let timeout = TimeoutFuture::new(FETCH_TIMEOUT_MS);

    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::Timeout),
    }
}

async fn fetch_proxied(url: String) -> Result<FetchedImage, FetchError> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let reason = match response.status_text() {
            text if text.is_empty() => format!("HTTP {}", status),
            text => text,
        };
        return Err(FetchError::Http { status, reason });
    }

    let content_type = response.headers().get("content-type").unwrap_or_default();
    let bytes = response
        .binary()
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    Ok(FetchedImage {
        content_type,
        bytes,
    })
}
